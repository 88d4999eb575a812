//! Tool system for the whiteboard.

use crate::error::BoardError;
use crate::shapes::ShapeKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Hand,
    Select,
    #[default]
    Draw,
    Square,
    Circle,
    Arrow,
    Line,
    Text,
    Eraser,
}

impl Tool {
    /// Every tool, in toolbar order.
    pub const ALL: [Tool; 9] = [
        Tool::Hand,
        Tool::Select,
        Tool::Draw,
        Tool::Square,
        Tool::Circle,
        Tool::Arrow,
        Tool::Line,
        Tool::Text,
        Tool::Eraser,
    ];

    /// Lowercase name, as used by the view layer.
    pub fn name(self) -> &'static str {
        match self {
            Tool::Hand => "hand",
            Tool::Select => "select",
            Tool::Draw => "draw",
            Tool::Square => "square",
            Tool::Circle => "circle",
            Tool::Arrow => "arrow",
            Tool::Line => "line",
            Tool::Text => "text",
            Tool::Eraser => "eraser",
        }
    }

    /// The kind of element this tool creates, if any.
    ///
    /// Navigation and editing tools (`hand`, `select`, `eraser`) create nothing.
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Tool::Draw => Some(ShapeKind::Draw),
            Tool::Square => Some(ShapeKind::Square),
            Tool::Circle => Some(ShapeKind::Circle),
            Tool::Arrow => Some(ShapeKind::Arrow),
            Tool::Line => Some(ShapeKind::Line),
            Tool::Text => Some(ShapeKind::Text),
            Tool::Hand | Tool::Select | Tool::Eraser => None,
        }
    }

    /// Whether `add` can build an element with this tool.
    pub fn creates_shape(self) -> bool {
        self.shape_kind().is_some()
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name() == s)
            .ok_or_else(|| BoardError::UnknownTool(s.to_string()))
    }
}

impl From<ShapeKind> for Tool {
    fn from(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Draw => Tool::Draw,
            ShapeKind::Square => Tool::Square,
            ShapeKind::Circle => Tool::Circle,
            ShapeKind::Line => Tool::Line,
            ShapeKind::Arrow => Tool::Arrow,
            ShapeKind::Text => Tool::Text,
        }
    }
}
