//! Database configuration and connection parameters.
//!
//! This module provides configuration types for database connections,
//! including path resolution and connection parameters.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// Name of the database file inside the data directory.
pub const DATABASE_FILE_NAME: &str = "encanto.db";

/// Backend assumed when none is configured.
pub const DEFAULT_BACKEND: &str = "sqlite";

/// Configuration for database connections.
///
/// # Examples
///
/// ```
/// use encanto::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("/tmp/encanto.db")
///     .with_busy_timeout(Duration::from_millis(10000));
/// assert_eq!(config.backend, "sqlite");
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// Declared storage backend; checked when the schema is set up.
    pub backend: String,
    /// Busy timeout for database lock contention.
    pub busy_timeout: Duration,
    /// Whether to automatically create the database if it doesn't exist.
    pub auto_create: bool,
    /// Whether to open the database in read-only mode.
    pub read_only: bool,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default settings.
    ///
    /// Default settings:
    /// - `backend`: `sqlite`
    /// - `busy_timeout`: 5000ms
    /// - `auto_create`: true
    /// - `read_only`: false
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            backend: DEFAULT_BACKEND.to_string(),
            busy_timeout: Duration::from_millis(5000),
            auto_create: true,
            read_only: false,
        }
    }

    /// Sets the busy timeout duration.
    ///
    /// The busy timeout bounds how long a writer waits for another
    /// connection's transaction to finish.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Declares the storage backend.
    ///
    /// # Examples
    ///
    /// ```
    /// use encanto::database::DatabaseConfig;
    ///
    /// let config = DatabaseConfig::new("/tmp/encanto.db").with_backend("postgresql");
    /// assert_eq!(config.backend, "postgresql");
    /// ```
    #[must_use]
    pub fn with_backend(mut self, backend: impl Into<String>) -> Self {
        self.backend = backend.into();
        self
    }

    /// Configures the database to be opened in read-only mode.
    ///
    /// When read-only is enabled, `auto_create` is automatically disabled.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }
}

/// Returns the default data directory, `~/.encanto`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| Error::Validation {
        field: "home_directory".into(),
        message: "Cannot determine home directory".into(),
    })?;
    Ok(home.join(".encanto"))
}

/// Returns the data directory, honouring `ENCANTO_DATA_DIR`.
///
/// # Errors
///
/// Returns an error if `ENCANTO_DATA_DIR` is unset and the home directory
/// cannot be determined.
pub fn resolve_data_dir() -> Result<PathBuf> {
    match std::env::var("ENCANTO_DATA_DIR") {
        Ok(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => default_data_dir(),
    }
}

/// Resolves the database path from the data directory.
///
/// # Errors
///
/// Same conditions as [`resolve_data_dir`].
///
/// # Examples
///
/// ```no_run
/// use encanto::database::resolve_database_path;
///
/// let db_path = resolve_database_path().unwrap();
/// println!("Database path: {}", db_path.display());
/// ```
pub fn resolve_database_path() -> Result<PathBuf> {
    Ok(resolve_data_dir()?.join(DATABASE_FILE_NAME))
}
