//! Circle (ellipse) payload.

use super::SerializableColor;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// An ellipse inscribed in the box spanned by two points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ellipse {
    pub start_point: Point,
    pub end_point: Point,
    /// Fill color (None = no fill).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<SerializableColor>,
}
