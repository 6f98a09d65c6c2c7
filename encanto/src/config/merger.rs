//! Configuration merging and precedence handling.
//!
//! This module implements hierarchical merging of configuration sources.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, DatabaseSettings};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use encanto::config::{Config, ConfigMerger, OutputFormat};
///
/// let low = Config { output_format: Some(OutputFormat::Csv), ..Default::default() };
/// let high = Config { output_format: Some(OutputFormat::Json), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.output_format, Some(OutputFormat::Json));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Database settings: field-by-field merge
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.path_separator.is_some() {
            target.path_separator.clone_from(&source.path_separator);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.log_mode.is_some() {
            target.log_mode = source.log_mode;
        }

        if source.disable_autoinit.is_some() {
            target.disable_autoinit = source.disable_autoinit;
        }

        if let Some(ref source_db) = source.database {
            target.database = Some(match &target.database {
                Some(target_db) => Self::merge_database(target_db, source_db),
                None => source_db.clone(),
            });
        }
    }

    fn merge_database(target: &DatabaseSettings, source: &DatabaseSettings) -> DatabaseSettings {
        DatabaseSettings {
            backend: source.backend.clone().or_else(|| target.backend.clone()),
            path: source.path.clone().or_else(|| target.path.clone()),
            busy_timeout_ms: source.busy_timeout_ms.or(target.busy_timeout_ms),
        }
    }
}
