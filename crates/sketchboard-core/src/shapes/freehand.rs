//! Freehand drawing shape.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A freehand drawing (series of points).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Freehand {
    /// Points in the freehand path.
    #[serde(default)]
    pub points: Vec<Point>,
}

impl Freehand {
    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_points_default_to_empty() {
        let path: Freehand = serde_json::from_str("{}").unwrap();
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
    }
}
