//! Error type for the edit history.

use thiserror::Error;

/// Errors raised by the action logger and its patch operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionLogError {
    /// A required action was missing or carried no changes
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A change points past the end of the text it is applied to
    #[error("change position {position} is out of bounds for text of length {len}")]
    PositionOutOfBounds { position: usize, len: usize },

    /// A removal does not match the text found at its position
    #[error("removed text mismatch at {position}: expected {expected:?}, found {found:?}")]
    TextMismatch {
        position: usize,
        expected: String,
        found: String,
    },
}

pub type Result<T> = std::result::Result<T, ActionLogError>;
