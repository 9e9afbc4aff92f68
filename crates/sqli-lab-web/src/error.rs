//! Error types for the web server.

use thiserror::Error;

/// Web server errors.
#[derive(Debug, Error)]
pub enum WebError {
    /// Socket error while binding or accepting.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Response serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for web operations.
pub type Result<T> = std::result::Result<T, WebError>;
