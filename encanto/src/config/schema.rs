//! Configuration schema definitions.
//!
//! This module defines the configuration structure for encanto: where the
//! catalog is stored, how category paths are entered, and how output and
//! logging behave.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::database::{DatabaseConfig, DATABASE_FILE_NAME, DEFAULT_BACKEND};
use crate::logging::LogLevel;
use crate::path::DEFAULT_SEPARATOR;

/// Default busy timeout for database lock contention, in milliseconds.
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

/// Complete configuration structure.
///
/// Every field is optional so partial files can be layered; accessors such
/// as [`Config::separator`] fill in defaults.
///
/// # Examples
///
/// ```
/// use encanto::config::{Config, OutputFormat};
///
/// let config: Config = serde_yaml::from_str("output_format: json\n").unwrap();
/// assert_eq!(config.output_format, Some(OutputFormat::Json));
/// assert_eq!(config.separator(), ".");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Storage settings.
    pub database: Option<DatabaseSettings>,

    /// Separator for user-entered category paths.
    pub path_separator: Option<String>,

    /// Output format for list commands.
    pub output_format: Option<OutputFormat>,

    /// Logging verbosity.
    pub log_mode: Option<LogLevel>,

    /// Disable automatic database initialization.
    pub disable_autoinit: Option<bool>,
}

impl Config {
    /// Separator for user-entered paths, `.` unless configured.
    #[must_use]
    pub fn separator(&self) -> &str {
        self.path_separator.as_deref().unwrap_or(DEFAULT_SEPARATOR)
    }

    /// Output format, `table` unless configured.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or(OutputFormat::Table)
    }

    /// Whether the database may be created on first use.
    #[must_use]
    pub fn autoinit(&self) -> bool {
        !self.disable_autoinit.unwrap_or(false)
    }

    /// Build the connection settings for a catalog in `data_dir`.
    ///
    /// An explicit `database.path` wins over `{data_dir}/encanto.db`.
    ///
    /// # Examples
    ///
    /// ```
    /// use encanto::config::Config;
    /// use std::path::Path;
    ///
    /// let db = Config::default().database_config(Path::new("/data"));
    /// assert_eq!(db.path, Path::new("/data/encanto.db"));
    /// assert_eq!(db.backend, "sqlite");
    /// ```
    #[must_use]
    pub fn database_config(&self, data_dir: &Path) -> DatabaseConfig {
        let settings = self.database.clone().unwrap_or_default();
        let path = settings
            .path
            .unwrap_or_else(|| data_dir.join(DATABASE_FILE_NAME));
        let mut config = DatabaseConfig::new(path)
            .with_backend(
                settings
                    .backend
                    .unwrap_or_else(|| DEFAULT_BACKEND.to_string()),
            )
            .with_busy_timeout(Duration::from_millis(
                settings.busy_timeout_ms.unwrap_or(DEFAULT_BUSY_TIMEOUT_MS),
            ));
        if !self.autoinit() {
            config.auto_create = false;
        }
        config
    }
}

/// Storage settings.
///
/// # Examples
///
/// ```
/// use encanto::config::DatabaseSettings;
///
/// let yaml = "backend: sqlite\nbusy_timeout_ms: 250\n";
/// let settings: DatabaseSettings = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(settings.busy_timeout_ms, Some(250));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DatabaseSettings {
    /// Declared storage backend. Only `sqlite` has path query support.
    pub backend: Option<String>,

    /// Database file; defaults to `encanto.db` in the data directory.
    pub path: Option<PathBuf>,

    /// Maximum time to wait for another writer, in milliseconds.
    pub busy_timeout_ms: Option<u64>,
}

/// Output format for list commands.
///
/// # Examples
///
/// ```
/// use encanto::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
    /// Human-readable table format.
    Table,
}

impl OutputFormat {
    /// Parses a format name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error message naming the accepted formats.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "table" => Ok(Self::Table),
            _ => Err(format!(
                "invalid output format: {s} (expected json, csv, tsv or table)"
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
            Self::Table => write!(f, "table"),
        }
    }
}
