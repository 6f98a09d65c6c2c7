//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `ENCANTO_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::logging::LogLevel;
use std::env;
use std::path::PathBuf;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use encanto::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// `ENCANTO_DATA_DIR` is not read here; it selects where the user config
    /// lives and is resolved by the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(backend) = env::var("ENCANTO_DB_BACKEND") {
            config.database.get_or_insert_with(Default::default).backend = Some(backend);
        }

        if let Ok(path) = env::var("ENCANTO_DB_PATH") {
            config.database.get_or_insert_with(Default::default).path = Some(PathBuf::from(path));
        }

        if let Ok(ms) = env::var("ENCANTO_BUSY_TIMEOUT_MS") {
            let ms = ms.trim().parse().map_err(|_| Error::Validation {
                field: "ENCANTO_BUSY_TIMEOUT_MS".into(),
                message: format!("Must be a positive integer, got '{ms}'"),
            })?;
            config.database.get_or_insert_with(Default::default).busy_timeout_ms = Some(ms);
        }

        if let Ok(separator) = env::var("ENCANTO_PATH_SEPARATOR") {
            config.path_separator = Some(separator);
        }

        if let Ok(format) = env::var("ENCANTO_OUTPUT_FORMAT") {
            config.output_format =
                Some(OutputFormat::parse(&format).map_err(|message| Error::Validation {
                    field: "ENCANTO_OUTPUT_FORMAT".into(),
                    message,
                })?);
        }

        if let Ok(mode) = env::var("ENCANTO_LOG_MODE") {
            config.log_mode = Some(LogLevel::parse(&mode).map_err(|message| Error::Validation {
                field: "ENCANTO_LOG_MODE".into(),
                message,
            })?);
        }

        if let Ok(val) = env::var("ENCANTO_DISABLE_AUTOINIT") {
            config.disable_autoinit = Some(Self::parse_bool("ENCANTO_DISABLE_AUTOINIT", &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
