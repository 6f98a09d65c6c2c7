//! Configuration validation.

use crate::config::schema::{Config, DatabaseSettings};
use crate::error::{Error, Result};

/// Validates a merged configuration.
///
/// The backend name is not checked here; an unsupported
/// backend is reported when the database is opened.
///
/// # Examples
///
/// ```
/// use encanto::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { path_separator: Some(String::new()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first invalid field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref database) = config.database {
            Self::validate_database(database)?;
        }

        if let Some(ref separator) = config.path_separator {
            if separator.is_empty() {
                return Err(Error::Validation {
                    field: "path_separator".into(),
                    message: "Cannot be empty".into(),
                });
            }
            if separator.trim().is_empty() {
                return Err(Error::Validation {
                    field: "path_separator".into(),
                    message: "Cannot be only whitespace".into(),
                });
            }
        }

        Ok(())
    }

    fn validate_database(database: &DatabaseSettings) -> Result<()> {
        if database.busy_timeout_ms == Some(0) {
            return Err(Error::Validation {
                field: "database.busy_timeout_ms".into(),
                message: "Timeout must be greater than 0".into(),
            });
        }

        if let Some(ref backend) = database.backend {
            if backend.trim().is_empty() {
                return Err(Error::Validation {
                    field: "database.backend".into(),
                    message: "Cannot be empty".into(),
                });
            }
        }

        if let Some(ref path) = database.path {
            if path.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "database.path".into(),
                    message: "Cannot be empty".into(),
                });
            }
        }

        Ok(())
    }
}
