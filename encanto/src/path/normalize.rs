//! Save-time normalization of category paths.
//!
//! Every label is capitalized by uppercasing its first character only; the
//! rest of the label is left as written. The result is checked for labels
//! that cannot survive a round trip through storage.

use crate::error::{Error, Result};

use super::types::{HierarchicalPath, DEFAULT_SEPARATOR};

/// A normalized path that is ready to be written, with its ancestor prefix.
///
/// Obtained from [`validate_and_normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPath {
    path: HierarchicalPath,
    ancestor: Option<HierarchicalPath>,
}

impl ValidatedPath {
    /// The normalized path.
    #[must_use]
    pub fn path(&self) -> &HierarchicalPath {
        &self.path
    }

    /// The ancestor prefix that must already exist, if any.
    #[must_use]
    pub fn ancestor(&self) -> Option<&HierarchicalPath> {
        self.ancestor.as_ref()
    }

    /// Consume into the normalized path.
    #[must_use]
    pub fn into_path(self) -> HierarchicalPath {
        self.path
    }
}

/// Uppercase the first character of `label`.
///
/// # Examples
///
/// ```
/// use encanto::path::normalize::capitalize_label;
///
/// assert_eq!(capitalize_label("phones"), "Phones");
/// assert_eq!(capitalize_label("iPhone"), "IPhone");
/// assert_eq!(capitalize_label("ébénisterie"), "Ébénisterie");
/// ```
#[must_use]
pub fn capitalize_label(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalize every label of `path`.
#[must_use]
pub fn normalize(path: &HierarchicalPath) -> HierarchicalPath {
    path.map_labels(capitalize_label)
}

/// Normalize `path` and compute its ancestor prefix.
///
/// This is the first half of the category write rule; the second half is
/// [`ensure_ancestor`](super::ancestry::ensure_ancestor).
///
/// # Errors
///
/// - [`Error::Validation`] if any label is empty.
/// - [`Error::InvalidPathValue`] if a label contains the storage separator.
///
/// # Examples
///
/// ```
/// use encanto::path::{validate_and_normalize, HierarchicalPath};
///
/// let path: HierarchicalPath = "electronics.phones".parse().unwrap();
/// let validated = validate_and_normalize(&path).unwrap();
/// assert_eq!(validated.path().to_string(), "Electronics.Phones");
/// assert_eq!(validated.ancestor().unwrap().to_string(), "Electronics");
/// ```
pub fn validate_and_normalize(path: &HierarchicalPath) -> Result<ValidatedPath> {
    for label in path.labels() {
        if label.is_empty() {
            return Err(Error::Validation {
                field: "path".into(),
                message: format!("path \"{path}\" contains an empty label"),
            });
        }
        if label.contains(DEFAULT_SEPARATOR) {
            return Err(Error::invalid_path(format!(
                "label \"{label}\" contains the storage separator '{DEFAULT_SEPARATOR}'"
            )));
        }
    }

    let normalized = normalize(path);
    let ancestor = normalized.parent();
    Ok(ValidatedPath {
        path: normalized,
        ancestor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> HierarchicalPath {
        s.parse().unwrap()
    }

    #[test]
    fn test_capitalize_first_character_only() {
        assert_eq!(capitalize_label("electronics"), "Electronics");
        assert_eq!(capitalize_label("usb cables"), "Usb cables");
        assert_eq!(capitalize_label("tV"), "TV");
        assert_eq!(capitalize_label("Already"), "Already");
        assert_eq!(capitalize_label("4k screens"), "4k screens");
        assert_eq!(capitalize_label(""), "");
    }

    #[test]
    fn test_capitalize_multi_char_uppercase() {
        // German sharp s uppercases to two characters.
        assert_eq!(capitalize_label("ßtraße"), "SStraße");
    }

    #[test]
    fn test_normalize_every_label() {
        assert_eq!(normalize(&p("home.kitchen.knives")).to_string(), "Home.Kitchen.Knives");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize(&p("a.bC.d"));
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_root_has_no_ancestor() {
        let validated = validate_and_normalize(&p("electronics")).unwrap();
        assert_eq!(validated.path().to_string(), "Electronics");
        assert!(validated.ancestor().is_none());
    }

    #[test]
    fn test_ancestor_is_normalized() {
        let validated = validate_and_normalize(&p("electronics.phones.cases")).unwrap();
        assert_eq!(validated.ancestor().unwrap().to_string(), "Electronics.Phones");
    }

    #[test]
    fn test_empty_label_rejected() {
        let err = validate_and_normalize(&p("electronics..phones")).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));

        let err = validate_and_normalize(&p("")).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_label_with_storage_separator_rejected() {
        let path = HierarchicalPath::from_delimited("v1.2/Docs", "/").unwrap();
        let err = validate_and_normalize(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidPathValue { .. }));
    }
}
