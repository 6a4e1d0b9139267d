//! Error types for the gridscan library.
//!
//! All errors are represented by the [`GridScanError`] enum. Validation
//! failures surface as [`GridScanError::InvalidInput`] at construction time;
//! [`GridScanError::Internal`] marks a violated invariant and always aborts
//! the call that raised it.

use std::io;

use thiserror::Error;

/// The main error type for gridscan operations.
#[derive(Error, Debug)]
pub enum GridScanError {
    /// Caller-supplied input was rejected (empty grid, ragged or oversized rows).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An internal invariant was violated. A defect, never a normal runtime
    /// condition.
    #[error("Internal error: {0}")]
    Internal(String),

    /// I/O errors from callers that feed the core from files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with GridScanError.
pub type Result<T> = std::result::Result<T, GridScanError>;

impl GridScanError {
    /// Create a new invalid-input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        GridScanError::InvalidInput(msg.into())
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        GridScanError::Internal(msg.into())
    }
}
