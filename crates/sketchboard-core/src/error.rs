//! Error types for board operations.

use crate::tools::Tool;
use thiserror::Error;

/// Errors raised by the element factory and value parsers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Unsupported tool type: {0}")]
    UnsupportedTool(Tool),
    #[error("Unknown tool name: {0}")]
    UnknownTool(String),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BoardError::UnsupportedTool(Tool::Eraser).to_string(),
            "Unsupported tool type: eraser"
        );
        assert_eq!(
            BoardError::InvalidColor("#12".into()).to_string(),
            "Invalid color: #12"
        );
    }
}
