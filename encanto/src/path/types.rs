//! Core types for hierarchical category paths.
//!
//! A [`HierarchicalPath`] is an ordered, non-empty sequence of labels read
//! from the root of the category tree to the leaf. Its canonical form joins
//! the labels with [`DEFAULT_SEPARATOR`].

use std::fmt;
use std::str::FromStr;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Separator used by the canonical form and by storage.
pub const DEFAULT_SEPARATOR: &str = ".";

/// The two input shapes a path can be built from.
///
/// # Examples
///
/// ```
/// use encanto::path::{HierarchicalPath, PathInput};
///
/// let a = HierarchicalPath::parse(PathInput::Delimited("a/b".into()), "/").unwrap();
/// let b = HierarchicalPath::parse(PathInput::Labels(vec!["a".into(), "b".into()]), ".").unwrap();
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathInput {
    /// A single string holding separator-delimited labels.
    Delimited(String),
    /// Labels that are already split.
    Labels(Vec<String>),
}

impl From<&str> for PathInput {
    fn from(value: &str) -> Self {
        Self::Delimited(value.to_string())
    }
}

impl From<String> for PathInput {
    fn from(value: String) -> Self {
        Self::Delimited(value)
    }
}

impl From<Vec<String>> for PathInput {
    fn from(value: Vec<String>) -> Self {
        Self::Labels(value)
    }
}

impl TryFrom<&serde_json::Value> for PathInput {
    type Error = Error;

    /// Accepts a JSON string or an array of JSON strings.
    fn try_from(value: &serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::String(s) => Ok(Self::Delimited(s.clone())),
            serde_json::Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_string).ok_or_else(|| {
                        Error::invalid_path(format!("label {item} is not a string"))
                    })
                })
                .collect::<Result<Vec<_>>>()
                .map(Self::Labels),
            other => Err(Error::invalid_path(format!(
                "expected a string or a list of strings, got {other}"
            ))),
        }
    }
}

/// A position in the category tree.
///
/// # Examples
///
/// ```
/// use encanto::path::HierarchicalPath;
///
/// let path: HierarchicalPath = "a.b.c".parse().unwrap();
/// assert_eq!(path.labels(), ["a", "b", "c"]);
/// assert_eq!(path.to_string(), "a.b.c");
/// assert_eq!(path.parent().unwrap().to_string(), "a.b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HierarchicalPath {
    labels: Vec<String>,
}

impl HierarchicalPath {
    /// Build a path from either input shape.
    ///
    /// A delimited string is split on `separator`; the empty string yields a
    /// single empty label.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPathValue`] if the separator is empty or the
    /// label sequence is empty.
    pub fn parse(input: PathInput, separator: &str) -> Result<Self> {
        match input {
            PathInput::Delimited(s) => Self::from_delimited(&s, separator),
            PathInput::Labels(labels) => Self::from_labels(labels),
        }
    }

    /// Split a delimited string into labels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPathValue`] if `separator` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use encanto::path::HierarchicalPath;
    ///
    /// let path = HierarchicalPath::from_delimited("", ".").unwrap();
    /// assert_eq!(path.labels(), [""]);
    /// ```
    pub fn from_delimited(s: &str, separator: &str) -> Result<Self> {
        if separator.is_empty() {
            return Err(Error::invalid_path("separator must not be empty"));
        }
        Ok(Self {
            labels: s.split(separator).map(str::to_string).collect(),
        })
    }

    /// Copy an ordered sequence of labels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPathValue`] if the sequence is empty.
    pub fn from_labels<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(Error::invalid_path("a path needs at least one label"));
        }
        Ok(Self { labels })
    }

    /// Build a path from an untyped JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPathValue`] for anything other than a string or
    /// an array of strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use encanto::path::HierarchicalPath;
    /// use serde_json::json;
    ///
    /// assert!(HierarchicalPath::from_json(&json!(["a", "b"])).is_ok());
    /// assert!(HierarchicalPath::from_json(&json!(42)).is_err());
    /// ```
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        Self::parse(PathInput::try_from(value)?, DEFAULT_SEPARATOR)
    }

    /// Join the labels with `separator`.
    #[must_use]
    pub fn to_string_with(&self, separator: &str) -> String {
        self.labels.join(separator)
    }

    /// The labels, root first.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always `false`: a path has at least one label.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Whether this is a root-level path (one label).
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.labels.len() == 1
    }

    /// The last label.
    #[must_use]
    pub fn leaf(&self) -> &str {
        self.labels.last().map_or("", String::as_str)
    }

    /// The ancestor prefix, or `None` for a root-level path.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        Some(Self {
            labels: self.labels[..self.labels.len() - 1].to_vec(),
        })
    }

    /// Every proper ancestor, root first.
    ///
    /// # Examples
    ///
    /// ```
    /// use encanto::path::HierarchicalPath;
    ///
    /// let path: HierarchicalPath = "A.B.C".parse().unwrap();
    /// let ancestors: Vec<String> = path.ancestors().iter().map(ToString::to_string).collect();
    /// assert_eq!(ancestors, ["A", "A.B"]);
    /// ```
    #[must_use]
    pub fn ancestors(&self) -> Vec<Self> {
        (1..self.labels.len())
            .map(|depth| Self {
                labels: self.labels[..depth].to_vec(),
            })
            .collect()
    }

    /// A new path one level below this one.
    #[must_use]
    pub fn child(&self, label: impl Into<String>) -> Self {
        let mut labels = self.labels.clone();
        labels.push(label.into());
        Self { labels }
    }

    /// Whether `self` starts with every label of `prefix`.
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.labels.starts_with(&prefix.labels)
    }

    /// Whether `self` is a proper ancestor of `other`.
    #[must_use]
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        other.labels.len() > self.labels.len() && other.starts_with(self)
    }

    /// Apply `f` to every label, keeping the shape of the path.
    pub(crate) fn map_labels(&self, f: impl Fn(&str) -> String) -> Self {
        Self {
            labels: self.labels.iter().map(|l| f(l)).collect(),
        }
    }
}

impl fmt::Display for HierarchicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(DEFAULT_SEPARATOR))
    }
}

impl FromStr for HierarchicalPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_delimited(s, DEFAULT_SEPARATOR)
    }
}

impl Serialize for HierarchicalPath {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for HierarchicalPath {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error as _;

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Helper {
            Delimited(String),
            Labels(Vec<String>),
        }

        let input = match Helper::deserialize(deserializer).map_err(|_| {
            D::Error::custom("invalid path value: expected a string or a list of strings")
        })? {
            Helper::Delimited(s) => PathInput::Delimited(s),
            Helper::Labels(labels) => PathInput::Labels(labels),
        };
        Self::parse(input, DEFAULT_SEPARATOR).map_err(D::Error::custom)
    }
}

impl ToSql for HierarchicalPath {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_string()))
    }
}

impl FromSql for HierarchicalPath {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        text.parse().map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}
