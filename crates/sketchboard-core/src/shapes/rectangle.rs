//! Square (axis-aligned rectangle) payload.

use super::SerializableColor;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A rectangle spanned by two corner points, as dragged by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rectangle {
    /// Corner where the drag started.
    pub start_point: Point,
    /// Corner where the drag ended.
    pub end_point: Point,
    /// Fill color (None = no fill).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<SerializableColor>,
}
