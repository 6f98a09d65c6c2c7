//! Database connection management.
//!
//! This module provides the main database connection type with the PRAGMA
//! settings the catalog relies on.

use rusqlite::{Connection, OpenFlags};

use crate::error::Result;

use super::backend::{ensure_path_support, StorageBackend};
use super::config::DatabaseConfig;

/// A catalog database connection.
///
/// Each `Database` owns one `SQLite` connection. Concurrent writers open
/// their own `Database` on the same file; WAL mode and the busy timeout let
/// them take turns.
///
/// # Examples
///
/// ```no_run
/// use encanto::database::{Database, DatabaseConfig};
///
/// let config = DatabaseConfig::new("/tmp/encanto.db");
/// let db = Database::open(config).unwrap();
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
    config: DatabaseConfig,
}

impl Database {
    /// Opens a database connection with the given configuration.
    ///
    /// This function will:
    /// - Reject backends without hierarchical path support
    /// - Create the parent directory if `auto_create` is enabled
    /// - Set WAL mode, the busy timeout and foreign key enforcement
    /// - Initialize or verify the database schema
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The declared backend is unsupported
    /// - The database file or its parent directory cannot be created
    /// - PRAGMA settings cannot be applied
    /// - Schema initialization or verification fails
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        let backend = StorageBackend::parse(&config.backend)?;

        if config.auto_create && !config.path.exists() {
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let flags = if config.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else if config.auto_create {
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
        };

        let conn = Connection::open_with_flags(&config.path, flags)?;
        Self::configure(&conn, &config)?;

        log::debug!(
            "opened {} catalog at {}",
            backend.name(),
            config.path.display()
        );

        Ok(Self { conn, config })
    }

    /// Opens a private in-memory catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be created.
    ///
    /// # Examples
    ///
    /// ```
    /// use encanto::database::Database;
    ///
    /// let db = Database::open_in_memory().unwrap();
    /// assert!(db.list_categories().unwrap().is_empty());
    /// ```
    pub fn open_in_memory() -> Result<Self> {
        let config = DatabaseConfig::new(":memory:");
        let conn = Connection::open_in_memory()?;
        Self::configure(&conn, &config)?;
        Ok(Self { conn, config })
    }

    fn configure(conn: &Connection, config: &DatabaseConfig) -> Result<()> {
        // journal_mode returns a row, so it cannot go through execute_batch
        let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        conn.execute_batch("PRAGMA synchronous = NORMAL")?;
        conn.execute_batch("PRAGMA foreign_keys = ON")?;
        conn.busy_timeout(config.busy_timeout)?;

        ensure_path_support(conn)?;

        if config.read_only {
            super::migrations::verify_schema_version(conn)
        } else {
            super::migrations::check_schema_compatibility(conn)
        }
    }

    /// The configuration this database was opened with.
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Returns a reference to the underlying `SQLite` connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Returns a mutable reference to the underlying `SQLite` connection.
    pub fn connection_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn test_database_open() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");
        let config = DatabaseConfig::new(&path);

        let db = Database::open(config).unwrap();
        assert!(path.exists());

        let journal_mode: String = db
            .connection()
            .query_row("PRAGMA journal_mode", [], |row| row.get(0))
            .unwrap();
        assert_eq!(journal_mode.to_lowercase(), "wal");

        let foreign_keys: i64 = db
            .connection()
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(foreign_keys, 1);
    }

    #[test]
    fn test_database_auto_create_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("subdir").join("test.db");
        let config = DatabaseConfig::new(&path);

        assert!(!path.parent().unwrap().exists());

        let _db = Database::open(config).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_unsupported_backend_fails_before_creating_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");
        let config = DatabaseConfig::new(&path).with_backend("postgresql");

        let err = Database::open(config).unwrap_err();
        assert!(matches!(err, Error::UnsupportedStorageBackend { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_database_read_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");

        {
            let config = DatabaseConfig::new(&path);
            Database::open(config).unwrap();
        }

        let config = DatabaseConfig::new(&path).read_only();
        let db = Database::open(config).unwrap();

        let result = db.connection().execute("CREATE TABLE test (id INTEGER)", []);
        assert!(result.is_err());
    }

    #[test]
    fn test_open_in_memory() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.config().backend, "sqlite");
    }
}
