//! Storage backend capability checks.
//!
//! Category paths are stored as canonical strings in an indexed TEXT column
//! and queried with label-boundary range predicates. A backend is accepted
//! only if it can do that; anything else fails before any table is created.

use rusqlite::Connection;

use crate::error::{Error, Result};

/// Oldest SQLite release the schema and queries are written against.
pub const MIN_SQLITE_VERSION: (u32, u32, u32) = (3, 24, 0);

/// A storage backend with hierarchical path support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// SQLite through `rusqlite`.
    Sqlite,
}

impl StorageBackend {
    /// Resolve a declared backend name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedStorageBackend`] for any backend other than
    /// SQLite.
    ///
    /// # Examples
    ///
    /// ```
    /// use encanto::database::StorageBackend;
    ///
    /// assert_eq!(StorageBackend::parse("SQLite").unwrap(), StorageBackend::Sqlite);
    /// assert!(StorageBackend::parse("mysql").is_err());
    /// ```
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            _ => Err(Error::UnsupportedStorageBackend {
                backend: name.to_string(),
                reason: "no hierarchical path column support; only sqlite is available".into(),
            }),
        }
    }

    /// Canonical backend name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
        }
    }
}

/// Verify that the connected SQLite library can run the path queries.
///
/// # Errors
///
/// Returns [`Error::UnsupportedStorageBackend`] if the library is older than
/// [`MIN_SQLITE_VERSION`] or reports a version that cannot be read.
pub fn ensure_path_support(conn: &Connection) -> Result<()> {
    let version: String = conn.query_row("SELECT sqlite_version()", [], |row| row.get(0))?;
    check_version(&version)
}

fn check_version(version: &str) -> Result<()> {
    let parsed = parse_version(version).ok_or_else(|| Error::UnsupportedStorageBackend {
        backend: format!("sqlite {version}"),
        reason: "unrecognised version string".into(),
    })?;

    if parsed < MIN_SQLITE_VERSION {
        let (major, minor, patch) = MIN_SQLITE_VERSION;
        return Err(Error::UnsupportedStorageBackend {
            backend: format!("sqlite {version}"),
            reason: format!("version {major}.{minor}.{patch} or newer is required"),
        });
    }

    log::debug!("sqlite {version} supports hierarchical path queries");
    Ok(())
}

fn parse_version(version: &str) -> Option<(u32, u32, u32)> {
    let mut parts = version.trim().split('.').map(str::parse::<u32>);
    let major = parts.next()?.ok()?;
    let minor = parts.next()?.ok()?;
    let patch = match parts.next() {
        Some(p) => p.ok()?,
        None => 0,
    };
    Some((major, minor, patch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_backend_names() {
        assert_eq!(StorageBackend::parse("sqlite").unwrap(), StorageBackend::Sqlite);
        assert_eq!(StorageBackend::parse(" sqlite3 ").unwrap(), StorageBackend::Sqlite);
        assert_eq!(StorageBackend::Sqlite.name(), "sqlite");
    }

    #[test]
    fn test_unsupported_backend() {
        let err = StorageBackend::parse("postgresql").unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedStorageBackend { ref backend, .. } if backend == "postgresql"
        ));
    }

    #[test]
    fn test_parse_version() {
        assert_eq!(parse_version("3.45.1"), Some((3, 45, 1)));
        assert_eq!(parse_version("3.24"), Some((3, 24, 0)));
        assert_eq!(parse_version("three"), None);
    }

    #[test]
    fn test_old_version_rejected() {
        assert!(check_version("3.23.1").is_err());
        assert!(check_version("3.24.0").is_ok());
        assert!(check_version("garbage").is_err());
    }

    #[test]
    fn test_bundled_sqlite_supported() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_path_support(&conn).unwrap();
    }
}
