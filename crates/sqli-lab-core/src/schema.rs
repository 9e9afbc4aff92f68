//! Table definition and storage preparation.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{CatalogError, Result};

/// SQL to create the products table (idempotent).
pub const CREATE_PRODUCTS_TABLE_SQL: &str = r"
CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT,
    price REAL
)
";

/// Reports the state of the database location before the first connection.
///
/// Creates the parent directory when it is missing. Access is checked for the
/// current user, not from the mode bits. An existing file without write
/// access is only warned about; a missing file in a directory the user cannot
/// create files in is an error because SQLite will not be able to create it.
pub fn prepare_storage(database_path: &Path) -> Result<()> {
    let dir = database_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    if dir.exists() {
        info!(dir = %dir.display(), "Database directory already exists");
    } else {
        info!(dir = %dir.display(), "Creating database directory");
        fs::create_dir_all(dir)?;
    }

    if database_path.exists() {
        if can_write_file(database_path) {
            info!(path = %database_path.display(), "Database file exists, write access OK");
        } else {
            warn!(path = %database_path.display(), "No write access to database file");
        }
    } else {
        if !can_create_in(dir) {
            warn!(dir = %dir.display(), "No write access to directory, cannot create database file");
            return Err(CatalogError::NotWritable(dir.to_path_buf()));
        }
        info!(path = %database_path.display(), "Database file does not exist, will be created");
    }

    Ok(())
}

/// Write access for the current user, tested by opening the file for
/// appending. Nothing is written.
fn can_write_file(path: &Path) -> bool {
    fs::OpenOptions::new().append(true).open(path).is_ok()
}

/// Whether the current user can create files in `dir`. Creates an anonymous
/// temporary file there, which is removed when dropped.
fn can_create_in(dir: &Path) -> bool {
    tempfile::tempfile_in(dir).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("db").join("products.db");

        prepare_storage(&path).unwrap();

        assert!(path.parent().unwrap().is_dir());
        assert!(!path.exists());
    }

    #[test]
    fn test_existing_file_is_accepted() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("products.db");
        fs::write(&path, b"").unwrap();

        prepare_storage(&path).unwrap();
    }

    #[test]
    fn test_access_check_leaves_directory_untouched() {
        let tmp = tempfile::tempdir().unwrap();
        let existing = tmp.path().join("products.db");
        fs::write(&existing, b"data").unwrap();

        prepare_storage(&existing).unwrap();
        prepare_storage(&tmp.path().join("other.db")).unwrap();

        assert_eq!(fs::read(&existing).unwrap(), b"data");
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_read_only_directory_follows_effective_access() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("locked");
        fs::create_dir(&dir).unwrap();
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o555)).unwrap();

        // Root ignores the mode bits, so ask the filesystem what applies here.
        let writable = tempfile::tempfile_in(&dir).is_ok();
        let result = prepare_storage(&dir.join("products.db"));

        fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).unwrap();
        if writable {
            assert!(result.is_ok());
        } else {
            assert!(matches!(result, Err(CatalogError::NotWritable(p)) if p == dir));
        }
    }

    #[test]
    fn test_bare_file_name_uses_current_directory() {
        // No parent component; must not try to create "".
        let path = Path::new("definitely-not-created-by-this-test.db");
        prepare_storage(path).unwrap();
        assert!(!path.exists());
    }
}
