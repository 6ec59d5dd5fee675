//! Layered error types
//!
//! Per-pair failures stay [`CoreError`]s and are recorded as skips; only
//! conditions that make the whole batch meaningless become [`BatchError`].

use segmetrics_core::CoreError;
use thiserror::Error;

/// Batch-level failures
#[derive(Error, Debug)]
pub enum BatchError {
    /// An input listing could not be produced at all
    #[error("image source unavailable: {path}: {reason}")]
    SourceUnavailable {
        /// Directory or pattern that failed
        path: String,
        /// Underlying cause
        reason: String,
    },

    /// Worker pool could not be built
    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Outcome of a single pairing
pub type PairResult<T> = std::result::Result<T, CoreError>;

/// Result type for batch operations
pub type Result<T> = std::result::Result<T, BatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_unavailable_display() {
        let err = BatchError::SourceUnavailable {
            path: "imagens/mascara".to_string(),
            reason: "No such file or directory".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "image source unavailable: imagens/mascara: No such file or directory"
        );
    }

    #[test]
    fn test_invalid_config_display() {
        let err = BatchError::InvalidConfig("threads must be > 0".to_string());
        assert!(err.to_string().starts_with("invalid configuration"));
    }
}
