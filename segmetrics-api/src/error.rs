//! API error types

use segmetrics_engine::BatchError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// The batch as a whole could not run
    #[error("batch error: {0}")]
    Batch(#[from] BatchError),

    /// A requested image file does not exist
    #[error("file not found: {path}")]
    MissingFile {
        /// Requested path
        path: String,
    },

    /// Caller-supplied argument out of range
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Result store could not be read or written
    #[error("result store error at {path}: {reason}")]
    Store {
        /// Store location
        path: String,
        /// Underlying cause
        reason: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ApiError {
    /// Whether this is the not-found condition of file lookups
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::MissingFile { .. })
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
