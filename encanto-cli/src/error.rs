//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use encanto::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Timeout waiting for database lock.
    Timeout,

    /// Catalog database not found (and auto-init disabled).
    NoDataDirectory,

    /// Configuration error.
    Config(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Validation failure or unknown record id
    /// - 2: Timeout waiting for database lock
    /// - 3: No catalog database found
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 6: Other library error
    /// - 7: Configuration or storage backend error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(lib_err) => match lib_err {
                e if e.is_validation_failure() || e.is_not_found() => 1,
                LibError::UnsupportedStorageBackend { .. }
                | LibError::UnsupportedSchemaVersion { .. }
                | LibError::Configuration(_) => 7,
                LibError::Io(_) => 5,
                _ => 6,
            },
            CliError::Timeout => 2,
            CliError::NoDataDirectory => 3,
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Timeout => write!(f, "Timeout waiting for database lock"),
            CliError::NoDataDirectory => {
                write!(
                    f,
                    "Catalog database not found (run `encanto init` or enable auto-init)"
                )
            }
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        if e.is_lock_timeout() {
            CliError::Timeout
        } else {
            CliError::Library(e)
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<csv::Error> for CliError {
    fn from(e: csv::Error) -> Self {
        CliError::Io(std::io::Error::other(e))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Io(std::io::Error::other(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failures_exit_one() {
        let err: CliError = LibError::MissingAncestor {
            path: "Garden.Tools".into(),
            ancestor: "Garden".into(),
        }
        .into();
        assert_eq!(err.exit_code(), 1);

        let err: CliError = LibError::ProtectedReference {
            entity: "brand",
            id: 1,
            dependents: 3,
        }
        .into();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_backend_errors_exit_seven() {
        let err: CliError = LibError::UnsupportedStorageBackend {
            backend: "postgresql".into(),
            reason: "only sqlite is supported".into(),
        }
        .into();
        assert_eq!(err.exit_code(), 7);
        assert_eq!(CliError::Config("bad".into()).exit_code(), 7);
    }

    #[test]
    fn test_other_codes() {
        assert_eq!(CliError::Timeout.exit_code(), 2);
        assert_eq!(CliError::NoDataDirectory.exit_code(), 3);
        assert_eq!(CliError::InvalidArguments("x".into()).exit_code(), 4);
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(CliError::from(io).exit_code(), 5);
    }
}
