//! Error types for QueenClimb

use thiserror::Error;

/// Main error type for QueenClimb operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueenClimbError {
    /// Malformed board construction (wrong length or out-of-range row)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A choice was requested from an empty candidate set
    #[error("No move available: candidate set is empty")]
    EmptyInput,

    /// Invalid operation for the current search state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Configuration values that cannot build a search
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for QueenClimb operations
pub type Result<T> = std::result::Result<T, QueenClimbError>;
