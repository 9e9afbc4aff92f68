//! Error types for catalog operations.

use std::path::PathBuf;

/// Errors that can occur while preparing or querying the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Connection, query, or row decoding failure.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Filesystem error while preparing the database location.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The database file cannot be created or written.
    #[error("No write access to '{0}'")]
    NotWritable(PathBuf),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
