//! Snapshot history for undo/redo.
//!
//! The board keeps its history as plain data (`history` and `step` on
//! [`BoardState`](crate::board::BoardState)) so snapshots stay complete.
//! [`Timeline`] is a borrowed cursor over those two fields.
//!
//! Invariant while recording: `history[step]` is the current element list.

use crate::shapes::Element;

/// Mutable view over a board's history entries and step pointer.
pub(crate) struct Timeline<'a> {
    entries: &'a mut Vec<Vec<Element>>,
    step: &'a mut usize,
}

impl<'a> Timeline<'a> {
    pub(crate) fn new(entries: &'a mut Vec<Vec<Element>>, step: &'a mut usize) -> Self {
        Self { entries, step }
    }

    /// Whether the next `record` needs the pre-change list as a baseline.
    pub(crate) fn needs_baseline(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record `current` as the newest entry, discarding any redo tail.
    ///
    /// At most `limit` undo steps are kept; older entries are dropped.
    pub(crate) fn record(&mut self, baseline: Option<Vec<Element>>, current: &[Element], limit: usize) {
        if self.entries.is_empty() {
            self.entries.push(baseline.unwrap_or_default());
            *self.step = 0;
        }

        // `step` may have been set past the end; entries is non-empty here.
        let keep = (*self.step).min(self.entries.len() - 1) + 1;
        self.entries.truncate(keep);
        self.entries.push(current.to_vec());

        let overflow = self.entries.len().saturating_sub(limit.saturating_add(1));
        if overflow > 0 {
            self.entries.drain(..overflow);
        }
        *self.step = self.entries.len() - 1;
    }

    pub(crate) fn can_back(&self) -> bool {
        can_back(self.entries.len(), *self.step)
    }

    pub(crate) fn can_forward(&self) -> bool {
        can_forward(self.entries.len(), *self.step)
    }

    /// Step back and return the element list to restore.
    pub(crate) fn back(&mut self) -> Option<Vec<Element>> {
        if !self.can_back() {
            return None;
        }
        *self.step -= 1;
        Some(self.entries[*self.step].clone())
    }

    /// Step forward and return the element list to restore.
    pub(crate) fn forward(&mut self) -> Option<Vec<Element>> {
        if !self.can_forward() {
            return None;
        }
        *self.step += 1;
        Some(self.entries[*self.step].clone())
    }
}

/// Whether a cursor at `step` over `len` entries can move back.
pub(crate) fn can_back(len: usize, step: usize) -> bool {
    step > 0 && step - 1 < len
}

/// Whether a cursor at `step` over `len` entries can move forward.
pub(crate) fn can_forward(len: usize, step: usize) -> bool {
    step.checked_add(1).is_some_and(|next| next < len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{ElementPatch, create_element};
    use crate::tools::Tool;

    fn element(id: &str) -> Element {
        create_element(Tool::Square, &ElementPatch::new().id(id)).unwrap()
    }

    #[test]
    fn test_first_record_keeps_baseline() {
        let mut entries = Vec::new();
        let mut step = 0;
        let mut timeline = Timeline::new(&mut entries, &mut step);

        assert!(timeline.needs_baseline());
        timeline.record(Some(Vec::new()), &[element("a")], 10);
        assert!(timeline.can_back());
        assert!(!timeline.can_forward());

        assert_eq!(entries.len(), 2);
        assert_eq!(step, 1);
    }

    #[test]
    fn test_back_and_forward() {
        let mut entries = Vec::new();
        let mut step = 0;
        let mut timeline = Timeline::new(&mut entries, &mut step);
        let a = element("a");
        let b = element("b");

        timeline.record(Some(Vec::new()), &[a.clone()], 10);
        timeline.record(None, &[a.clone(), b.clone()], 10);

        assert_eq!(timeline.back(), Some(vec![a.clone()]));
        assert_eq!(timeline.back(), Some(Vec::new()));
        assert_eq!(timeline.back(), None);
        assert_eq!(timeline.forward(), Some(vec![a.clone()]));
        assert_eq!(timeline.forward(), Some(vec![a, b]));
        assert_eq!(timeline.forward(), None);
    }

    #[test]
    fn test_record_discards_redo_tail() {
        let mut entries = Vec::new();
        let mut step = 0;
        let mut timeline = Timeline::new(&mut entries, &mut step);
        let a = element("a");
        let c = element("c");

        timeline.record(Some(Vec::new()), &[a.clone()], 10);
        timeline.record(None, &[a.clone(), element("b")], 10);
        timeline.back();
        timeline.record(None, &[a.clone(), c.clone()], 10);

        assert!(!timeline.can_forward());
        assert_eq!(entries, vec![Vec::new(), vec![a.clone()], vec![a, c]]);
        assert_eq!(step, 2);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut entries = Vec::new();
        let mut step = 0;
        let mut timeline = Timeline::new(&mut entries, &mut step);

        timeline.record(Some(Vec::new()), &[element("a")], 2);
        timeline.record(None, &[element("b")], 2);
        timeline.record(None, &[element("c")], 2);

        assert_eq!(entries.len(), 3);
        assert_eq!(step, 2);
        assert_eq!(entries[0][0].id().as_str(), "a");
    }

    #[test]
    fn test_step_past_end_is_clamped() {
        let mut entries = Vec::new();
        let mut step = 0;
        Timeline::new(&mut entries, &mut step).record(Some(Vec::new()), &[element("a")], 10);

        step = usize::MAX;
        let mut timeline = Timeline::new(&mut entries, &mut step);
        assert!(!timeline.can_forward());
        assert_eq!(timeline.forward(), None);
        timeline.record(None, &[element("b")], 10);

        assert_eq!(entries.len(), 3);
        assert_eq!(step, 2);
    }

    #[test]
    fn test_unbounded_limit() {
        let mut entries = Vec::new();
        let mut step = 0;
        let mut timeline = Timeline::new(&mut entries, &mut step);

        timeline.record(Some(Vec::new()), &[element("a")], usize::MAX);
        timeline.record(None, &[element("b")], usize::MAX);

        assert_eq!(entries.len(), 3);
        assert_eq!(step, 2);
    }

    #[test]
    fn test_cursor_checks_are_total() {
        assert!(!can_forward(3, usize::MAX));
        assert!(!can_back(3, usize::MAX));
        assert!(!can_back(3, 0));
        assert!(can_back(3, 1));
        assert!(can_forward(3, 1));
    }
}
