//! Line shape.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A straight line segment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    /// Start point.
    pub start_point: Point,
    /// End point.
    pub end_point: Point,
}
