//! Board state and the observable store that owns it.

use crate::config::{BoardConfig, HistoryMode};
use crate::error::BoardResult;
use crate::factory::{ElementPatch, create_element_with};
use crate::history::{self, Timeline};
use crate::shapes::{Element, ElementId};
use crate::tools::Tool;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Snapshot of everything the view layer renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    /// Currently active tool.
    pub tool: Tool,
    /// Elements in z-order (back to front).
    pub elements: Vec<Element>,
    /// Ids of the selected elements.
    pub selected_ids: Vec<ElementId>,
    /// Recorded element lists (only filled in snapshot history mode).
    pub history: Vec<Vec<Element>>,
    /// Position in `history`.
    pub step: usize,
}

impl BoardState {
    /// Create an empty board with `tool` active.
    pub fn new(tool: Tool) -> Self {
        Self {
            tool,
            elements: Vec::new(),
            selected_ids: Vec::new(),
            history: Vec::new(),
            step: 0,
        }
    }

    /// Get an element by ID.
    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|element| element.id() == id)
    }

    fn position(&self, id: &ElementId) -> Option<usize> {
        self.elements.iter().position(|element| element.id() == id)
    }

    pub fn is_selected(&self, id: &ElementId) -> bool {
        self.selected_ids.contains(id)
    }

    /// Run `change` on the element list, recording the result when history
    /// is enabled.
    fn change_elements(&mut self, history: HistoryMode, change: impl FnOnce(&mut Vec<Element>)) {
        let HistoryMode::Snapshots { limit } = history else {
            change(&mut self.elements);
            return;
        };

        let mut timeline = Timeline::new(&mut self.history, &mut self.step);
        let baseline = timeline.needs_baseline().then(|| self.elements.clone());
        change(&mut self.elements);
        timeline.record(baseline, &self.elements, limit);
    }

    /// Drop selected ids with no element and make every element's
    /// `is_selected` flag agree with `selected_ids`.
    fn sync_selection(&mut self) {
        let elements = &self.elements;
        self.selected_ids
            .retain(|id| elements.iter().any(|element| element.id() == id));
        for element in self.elements.iter_mut() {
            element.is_selected = self.selected_ids.contains(element.id());
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(Tool::default())
    }
}

/// Handle returned by [`BoardStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&BoardState)>;

/// Observable, caller-owned board store.
///
/// Every mutation produces a new [`BoardState`] snapshot (copy-on-write, so
/// snapshots obtained earlier never change) and then calls each listener
/// once, in registration order.
pub struct BoardStore {
    state: Rc<BoardState>,
    config: BoardConfig,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BoardStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardStore")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl BoardStore {
    /// Create a store with the default configuration.
    pub fn new() -> Self {
        Self::with_config(BoardConfig::default())
    }

    pub fn with_config(config: BoardConfig) -> Self {
        Self {
            state: Rc::new(BoardState::new(config.initial_tool)),
            config,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Current state.
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Shared handle to the current snapshot.
    pub fn snapshot(&self) -> Rc<BoardState> {
        Rc::clone(&self.state)
    }

    pub fn tool(&self) -> Tool {
        self.state.tool
    }

    pub fn elements(&self) -> &[Element] {
        &self.state.elements
    }

    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.state.element(id)
    }

    pub fn selected_ids(&self) -> &[ElementId] {
        &self.state.selected_ids
    }

    pub fn len(&self) -> usize {
        self.state.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.elements.is_empty()
    }

    /// Register a listener. It is called right away with the current state,
    /// then after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(&BoardState) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;

        let mut listener: Listener = Box::new(listener);
        listener(&self.state);
        self.listeners.push((id, listener));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn commit(&mut self, change: impl FnOnce(&mut BoardState)) {
        change(Rc::make_mut(&mut self.state));
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }

    /// Set the active tool.
    pub fn set_tool(&mut self, tool: Tool) {
        log::debug!("Tool changed: {} -> {}", self.state.tool, tool);
        self.commit(|state| state.tool = tool);
    }

    pub fn set_step(&mut self, step: usize) {
        self.commit(|state| state.step = step);
    }

    pub fn set_selected_ids(&mut self, ids: Vec<ElementId>) {
        self.commit(|state| state.selected_ids = ids);
    }

    /// Build an element with the active tool and append it.
    ///
    /// Fails without touching the state if the active tool creates no
    /// elements.
    pub fn add(&mut self, patch: &ElementPatch) -> BoardResult<ElementId> {
        let element = create_element_with(&self.config, self.state.tool, patch)?;
        let id = element.id().clone();
        log::debug!("Adding {} element {}", element.kind(), id);

        let history = self.config.history;
        self.commit(|state| state.change_elements(history, |elements| elements.push(element)));
        Ok(id)
    }

    /// Merge `patch` into the element with `id`.
    ///
    /// Returns false, leaving the state untouched, if no such element exists.
    pub fn update(&mut self, id: &ElementId, patch: &ElementPatch) -> bool {
        let Some(index) = self.state.position(id) else {
            log::trace!("Update skipped, no element {}", id);
            return false;
        };

        let history = self.config.history;
        self.commit(|state| {
            state.change_elements(history, |elements| elements[index].apply_patch(patch));
        });
        true
    }

    /// Mark exactly the elements in `ids` as selected.
    pub fn select(&mut self, ids: &[ElementId]) {
        self.commit(|state| {
            for element in state.elements.iter_mut() {
                element.is_selected = ids.contains(element.id());
            }
            state.selected_ids = ids.to_vec();
        });
    }

    /// Remove every element whose id is in `ids`. Returns how many were removed.
    pub fn remove(&mut self, ids: &[ElementId]) -> usize {
        let count = self
            .state
            .elements
            .iter()
            .filter(|element| ids.contains(element.id()))
            .count();
        if count == 0 {
            return 0;
        }

        log::debug!("Removing {} element(s)", count);
        let history = self.config.history;
        self.commit(|state| {
            state.change_elements(history, |elements| {
                elements.retain(|element| !ids.contains(element.id()));
            });
            state.selected_ids.retain(|id| !ids.contains(id));
        });
        count
    }

    /// Remove all elements and reset history and selection.
    pub fn clear(&mut self) {
        log::debug!("Clearing board ({} elements)", self.len());
        self.commit(|state| {
            state.elements.clear();
            state.history.clear();
            state.step = 0;
            state.selected_ids.clear();
        });
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        if !self.config.history.is_enabled() {
            return false;
        }
        history::can_back(self.state.history.len(), self.state.step)
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.config.history.is_enabled()
            && history::can_forward(self.state.history.len(), self.state.step)
    }

    /// Undo the last element change.
    ///
    /// Does nothing unless snapshot history is enabled. Returns true if the
    /// board moved back a step.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.commit(|state| {
            let restored = Timeline::new(&mut state.history, &mut state.step).back();
            if let Some(elements) = restored {
                state.elements = elements;
                state.sync_selection();
            }
        });
        log::debug!("Undo to step {}", self.state.step);
        true
    }

    /// Redo the last undone change. Mirrors [`undo`](Self::undo).
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.commit(|state| {
            let restored = Timeline::new(&mut state.history, &mut state.step).forward();
            if let Some(elements) = restored {
                state.elements = elements;
                state.sync_selection();
            }
        });
        log::debug!("Redo to step {}", self.state.step);
        true
    }
}
