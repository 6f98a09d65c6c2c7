//! Ancestor existence checks against a path index.
//!
//! The write rule for categories needs one question answered by storage:
//! "is there a stored path equal to, or below, this ancestor prefix?"
//! [`AncestorIndex`] is that question; [`ensure_ancestor`] turns a negative
//! answer into [`Error::MissingAncestor`].

use std::collections::BTreeSet;

use rusqlite::{params, Connection};

use crate::error::{Error, Result};

use super::normalize::ValidatedPath;
use super::types::HierarchicalPath;

/// SQL for a label-boundary prefix match on the indexed `path` column.
///
/// `?2` is the prefix followed by `.`, `?3` the prefix followed by `/`, the
/// byte right after `.`; the range covers exactly the descendants.
const SELECT_PREFIX_EXISTS: &str = r"
    SELECT EXISTS(
        SELECT 1 FROM categories
        WHERE path = ?1 OR (path >= ?2 AND path < ?3)
    )
";

/// Storage that can answer prefix queries over stored category paths.
#[cfg_attr(test, mockall::automock)]
pub trait AncestorIndex {
    /// Whether a stored path equals `prefix` or lies below it.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage query fails.
    fn contains_prefix(&self, prefix: &HierarchicalPath) -> Result<bool>;
}

/// Bounds of the descendant range for `prefix` in canonical string order.
pub(crate) fn descendant_range(prefix: &HierarchicalPath) -> (String, String) {
    let canonical = prefix.to_string();
    (format!("{canonical}."), format!("{canonical}/"))
}

impl AncestorIndex for Connection {
    fn contains_prefix(&self, prefix: &HierarchicalPath) -> Result<bool> {
        let (low, high) = descendant_range(prefix);
        let exists: bool = self.query_row(
            SELECT_PREFIX_EXISTS,
            params![prefix.to_string(), low, high],
            |row| row.get(0),
        )?;
        Ok(exists)
    }
}

impl AncestorIndex for BTreeSet<String> {
    fn contains_prefix(&self, prefix: &HierarchicalPath) -> Result<bool> {
        let (low, high) = descendant_range(prefix);
        Ok(self.contains(&prefix.to_string()) || self.range(low..high).next().is_some())
    }
}

/// Fail with [`Error::MissingAncestor`] unless the ancestor of `validated`
/// is present in `index`.
///
/// Root-level paths pass without consulting the index.
///
/// # Errors
///
/// Returns [`Error::MissingAncestor`] if the ancestor prefix is absent, or
/// the index's own error if the lookup fails.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use encanto::path::{ensure_ancestor, validate_and_normalize, HierarchicalPath};
///
/// let mut index = BTreeSet::new();
/// let phones: HierarchicalPath = "electronics.phones".parse().unwrap();
/// let validated = validate_and_normalize(&phones).unwrap();
/// assert!(ensure_ancestor(&index, &validated).is_err());
///
/// index.insert("Electronics".to_string());
/// assert!(ensure_ancestor(&index, &validated).is_ok());
/// ```
pub fn ensure_ancestor<I>(index: &I, validated: &ValidatedPath) -> Result<()>
where
    I: AncestorIndex + ?Sized,
{
    let Some(ancestor) = validated.ancestor() else {
        return Ok(());
    };

    if index.contains_prefix(ancestor)? {
        log::debug!("ancestor {ancestor} found for {}", validated.path());
        return Ok(());
    }

    log::warn!(
        "rejecting {}: ancestor {ancestor} does not exist",
        validated.path()
    );
    Err(Error::MissingAncestor {
        path: validated.path().to_string(),
        ancestor: ancestor.to_string(),
    })
}
