//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including data directory resolution, configuration loading, database
//! management and path parsing.

use crate::error::CliError;
use chrono::{DateTime, Utc};
use encanto::config::DatabaseSettings;
use encanto::{Config, ConfigBuilder, Database, HierarchicalPath, LogLevel};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the busy timeout (in milliseconds).
    pub busy_timeout: Option<u64>,

    /// Override the category path separator.
    pub separator: Option<String>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Resolve the data directory.
///
/// `--data-dir` (or `ENCANTO_DATA_DIR`, which clap folds into the flag) wins;
/// otherwise `~/.encanto`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match global.data_dir {
        Some(ref dir) => Ok(dir.clone()),
        None => encanto::database::resolve_data_dir().map_err(|e| CliError::Config(e.to_string())),
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Project `encanto.yaml`
/// 4. User config in the data directory
/// 5. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_dir(global)?;

    let overrides = Config {
        database: global.busy_timeout.map(|ms| DatabaseSettings {
            busy_timeout_ms: Some(ms),
            ..Default::default()
        }),
        path_separator: global.separator.clone(),
        disable_autoinit: global.disable_autoinit.then_some(true),
        ..Default::default()
    };

    ConfigBuilder::new()
        .with_data_dir(&data_dir)
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Pick the log level: flags first, then configuration, then
/// `ENCANTO_LOG_MODE` alone if the configuration cannot be loaded.
pub fn resolve_log_level(global: &GlobalOptions) -> LogLevel {
    if global.verbose || global.quiet {
        return encanto::init_logger(global.verbose, global.quiet).level();
    }
    load_configuration(global)
        .ok()
        .and_then(|config| config.log_mode)
        .unwrap_or_else(|| encanto::init_logger(false, false).level())
}

/// Open the catalog database described by `config`.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let data_dir = resolve_data_dir(global)?;
    let db_config = config.database_config(&data_dir);

    if !db_config.path.exists() && !config.autoinit() {
        return Err(CliError::NoDataDirectory);
    }

    log::debug!("opening catalog {}", db_config.path.display());
    Database::open(db_config).map_err(CliError::from)
}

/// Load configuration and open the catalog in one step.
pub fn open_catalog(global: &GlobalOptions) -> Result<(Config, Database), CliError> {
    let config = load_configuration(global)?;
    let db = open_database(global, &config)?;
    Ok((config, db))
}

/// Parse a category path typed on the command line.
pub fn parse_category_path(input: &str, config: &Config) -> Result<HierarchicalPath, CliError> {
    HierarchicalPath::from_delimited(input, config.separator())
        .map_err(|e| CliError::InvalidArguments(e.to_string()))
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Print a progress message on stderr unless `--quiet` is set.
pub fn report(global: &GlobalOptions, message: &str) {
    if !global.quiet {
        eprintln!("{message}");
    }
}
