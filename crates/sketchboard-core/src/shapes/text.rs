//! Text shape.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A text label anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Text {
    /// Top-left corner.
    pub origin: Point,
    /// Text content (may contain newlines).
    #[serde(default)]
    pub content: String,
    /// Font size in pixels.
    #[serde(default = "default_font_size")]
    pub font_size: f64,
}

fn default_font_size() -> f64 {
    Text::DEFAULT_FONT_SIZE
}

impl Default for Text {
    fn default() -> Self {
        Self {
            origin: Point::ZERO,
            content: String::new(),
            font_size: Text::DEFAULT_FONT_SIZE,
        }
    }
}

impl Text {
    pub const DEFAULT_FONT_SIZE: f64 = 20.0;
}
