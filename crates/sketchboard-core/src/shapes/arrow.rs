//! Arrow shape.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Which ends of an arrow carry a head.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowDirection {
    Start,
    #[default]
    End,
    Both,
}

/// An arrow shape (line with arrowheads).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arrow {
    /// Start point.
    pub start_point: Point,
    /// End point.
    pub end_point: Point,
    /// Where the heads are drawn.
    #[serde(default)]
    pub arrow_direction: ArrowDirection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_defaults_to_end() {
        let arrow: Arrow = serde_json::from_str(
            r#"{"startPoint":{"x":0.0,"y":0.0},"endPoint":{"x":10.0,"y":0.0}}"#,
        )
        .unwrap();
        assert_eq!(arrow.arrow_direction, ArrowDirection::End);
        assert_eq!(serde_json::to_value(ArrowDirection::Both).unwrap(), "both");
    }
}
