//! Error types for draft persistence.

use thiserror::Error;

/// Result type for draft operations.
pub type DraftResult<T> = Result<T, DraftError>;

/// Errors that can occur reading or writing the draft slot.
#[derive(Debug, Error)]
pub enum DraftError {
    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The stored record parsed but cannot be used.
    #[error("corrupt draft: {0}")]
    Corrupt(String),
}
