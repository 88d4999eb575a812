//! Board configuration supplied by the host application.

use crate::shapes::SerializableColor;
use crate::tools::Tool;
use serde::{Deserialize, Serialize};

/// Default number of undo steps kept in snapshot mode.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

/// How the store tracks undo/redo history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum HistoryMode {
    /// `undo`/`redo` do nothing; `history` and `step` are plain fields.
    #[default]
    Disabled,
    /// Record the element list after every element change.
    Snapshots {
        /// Maximum number of undo steps kept.
        #[serde(default = "default_history_limit")]
        limit: usize,
    },
}

impl HistoryMode {
    /// Snapshot history with the default limit.
    pub fn snapshots() -> Self {
        HistoryMode::Snapshots {
            limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, HistoryMode::Snapshots { .. })
    }
}

/// Defaults applied to new boards and new elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    /// Tool active when the board is created.
    pub initial_tool: Tool,
    /// Stroke color for new elements.
    pub stroke_color: SerializableColor,
    /// Stroke width for new elements.
    pub stroke_width: f64,
    /// Undo/redo behavior.
    pub history: HistoryMode,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            initial_tool: Tool::Draw,
            stroke_color: SerializableColor::black(),
            stroke_width: 1.0,
            history: HistoryMode::Disabled,
        }
    }
}

impl BoardConfig {
    pub fn with_history(mut self, history: HistoryMode) -> Self {
        self.history = history;
        self
    }

    pub fn with_initial_tool(mut self, tool: Tool) -> Self {
        self.initial_tool = tool;
        self
    }

    pub fn with_stroke(mut self, color: SerializableColor, width: f64) -> Self {
        self.stroke_color = color;
        self.stroke_width = width;
        self
    }
}
