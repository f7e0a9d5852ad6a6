use crate::error::{DuckViewError, Result};
use duckdb::{AccessMode, Config, Connection};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The single read-only handle to a DuckDB database file.
///
/// Opened once at startup and owned for the lifetime of the process;
/// operations borrow it and the engine connection closes when the value is
/// dropped. There is no pooling and no reconnection.
#[derive(Debug)]
pub struct Database {
    conn: Connection,
    path: PathBuf,
}

impl Database {
    /// Open `path` read-only. Fails if the file is missing, locked, or not
    /// a DuckDB database; callers treat this as fatal.
    pub fn open_read_only(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let config = Config::default()
            .access_mode(AccessMode::ReadOnly)
            .map_err(|source| DuckViewError::Connection {
                path: path.clone(),
                source,
            })?;
        let conn = Connection::open_with_flags(&path, config).map_err(|source| {
            DuckViewError::Connection {
                path: path.clone(),
                source,
            }
        })?;
        debug!(path = %path.display(), "opened read-only connection");
        Ok(Self { conn, path })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_db;

    #[test]
    fn test_open_missing_file_is_connection_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("absent.db");

        let err = Database::open_read_only(&path).unwrap_err();
        match err {
            DuckViewError::Connection { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected connection error, got {other:?}"),
        }
    }

    #[test]
    fn test_open_seeded_file_read_only() {
        let (_dir, path) = test_db::seeded_file();
        let db = Database::open_read_only(&path).unwrap();
        assert_eq!(db.path(), path.as_path());

        let count: i64 = db
            .conn()
            .query_row("SELECT COUNT(*) FROM Orders", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 5);
    }
}
