//! PitVoice Error Types
//!
//! Centralized error handling for the crate.

use thiserror::Error;

/// Central error type for PitVoice
#[derive(Error, Debug)]
pub enum PitError {
    #[error("Vocabulary error: {0}")]
    Vocabulary(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Lock poisoned: {0}")]
    Lock(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for PitVoice operations
pub type PitResult<T> = Result<T, PitError>;

/// Helper to convert Mutex poison errors
impl<T> From<std::sync::PoisonError<T>> for PitError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        PitError::Lock(err.to_string())
    }
}
