//! Catalog configuration.

use std::path::{Path, PathBuf};

/// Default location of the catalog database, relative to the working directory.
pub const DEFAULT_DATABASE_PATH: &str = "db/products.db";

/// Where the catalog lives.
///
/// Built once at startup and handed to [`crate::Catalog::new`]; nothing in
/// the crate reads a global path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    database_path: PathBuf,
}

impl CatalogConfig {
    /// Creates a configuration pointing at the given SQLite file.
    #[must_use]
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
        }
    }

    /// Returns the SQLite file path.
    #[must_use]
    pub fn database_path(&self) -> &Path {
        &self.database_path
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        let config = CatalogConfig::default();
        assert_eq!(config.database_path(), Path::new("db/products.db"));
    }

    #[test]
    fn test_explicit_path() {
        let config = CatalogConfig::new("/tmp/shop.db");
        assert_eq!(config.database_path(), Path::new("/tmp/shop.db"));
    }
}
