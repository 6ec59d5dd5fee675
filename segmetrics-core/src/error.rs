//! Core error types

use thiserror::Error;

/// Errors raised while decoding, binarizing or comparing masks
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Image could not be read or decoded
    #[error("failed to decode image '{path}': {reason}")]
    Decode {
        /// Path of the offending file
        path: String,
        /// Decoder or I/O message
        reason: String,
    },

    /// Two masks do not cover the same pixel grid
    #[error("shape mismatch: expected {}x{}, got {}x{}", expected.0, expected.1, actual.0, actual.1)]
    ShapeMismatch {
        /// (width, height) of the ground-truth mask
        expected: (u32, u32),
        /// (width, height) of the predicted mask
        actual: (u32, u32),
    },

    /// Pixel buffer length does not match width * height
    #[error("invalid mask dimensions: {width}x{height} needs {expected} pixels, got {actual}")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// width * height
        expected: usize,
        /// Supplied buffer length
        actual: usize,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
