//! Error types for the encanto library.
//!
//! This module provides the error hierarchy for every catalog operation,
//! using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an encanto error.
///
/// # Examples
///
/// ```
/// use encanto::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the encanto library.
#[derive(Debug, Error)]
pub enum Error {
    /// A hierarchical path was built from an input it cannot represent.
    #[error("invalid path value: {reason}")]
    InvalidPathValue {
        /// Why the input was rejected.
        reason: String,
    },

    /// The storage backend cannot hold hierarchical paths.
    #[error("unsupported storage backend '{backend}': {reason}")]
    UnsupportedStorageBackend {
        /// The backend that was declared.
        backend: String,
        /// What the backend is missing.
        reason: String,
    },

    /// A category was saved before its parent category existed.
    #[error("invalid ancestors (\"{ancestor}\") for path \"{path}\"")]
    MissingAncestor {
        /// The normalized path that was being saved.
        path: String,
        /// The ancestor prefix that was not found.
        ancestor: String,
    },

    /// A record cannot be deleted while other records reference it.
    #[error("cannot delete {entity} {id}: referenced by {dependents} product(s)")]
    ProtectedReference {
        /// The kind of record ("category" or "brand").
        entity: &'static str,
        /// The identifier of the protected record.
        id: i64,
        /// How many products still reference it.
        dependents: usize,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A filesystem path (data directory, config file) is unusable.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

impl Error {
    /// Shorthand for an [`Error::InvalidPathValue`].
    pub(crate) fn invalid_path(reason: impl Into<String>) -> Self {
        Self::InvalidPathValue {
            reason: reason.into(),
        }
    }

    /// Shorthand for an [`Error::NotFound`].
    pub(crate) fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Check if the error is a validation failure the caller can fix and retry.
    ///
    /// # Examples
    ///
    /// ```
    /// use encanto::Error;
    ///
    /// let err = Error::MissingAncestor {
    ///     path: "Electronics.Phones".into(),
    ///     ancestor: "Electronics".into(),
    /// };
    /// assert!(err.is_validation_failure());
    /// ```
    #[must_use]
    pub fn is_validation_failure(&self) -> bool {
        matches!(
            self,
            Self::MissingAncestor { .. }
                | Self::ProtectedReference { .. }
                | Self::InvalidPathValue { .. }
                | Self::Validation { .. }
        )
    }

    /// Check if the error indicates a missing record.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if another writer held the database lock past the busy timeout.
    #[must_use]
    pub fn is_lock_timeout(&self) -> bool {
        use rusqlite::ErrorCode;

        match self {
            Self::Database(rusqlite::Error::SqliteFailure(e, _)) => {
                matches!(e.code, ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked)
            }
            _ => false,
        }
    }
}
