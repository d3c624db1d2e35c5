//! Errors that end the serve loop.
//!
//! Per-line protocol failures never surface here; they are answered on the
//! wire (or skipped) by the responder.

use thiserror::Error;

/// Result type for stream-level operations
pub type ServerResult<T> = Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    /// Reading the input stream or writing the output stream failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A response could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
