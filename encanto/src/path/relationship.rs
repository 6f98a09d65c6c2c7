//! Relationship between two category paths.

use super::types::HierarchicalPath;

/// How two paths relate in the category tree.
///
/// Comparison is label by label, so `A.B` is not an ancestor of `A.Bc`.
///
/// # Examples
///
/// ```
/// use encanto::path::{HierarchicalPath, PathRelationship};
///
/// let parent: HierarchicalPath = "Home".parse().unwrap();
/// let child: HierarchicalPath = "Home.Kitchen".parse().unwrap();
///
/// assert_eq!(PathRelationship::between(&parent, &child), PathRelationship::Ancestor);
/// assert_eq!(PathRelationship::between(&child, &parent), PathRelationship::Descendant);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is a proper ancestor of the second.
    Ancestor,

    /// The first path is a proper descendant of the second.
    Descendant,

    /// The paths have the same labels.
    Same,

    /// Neither path is below the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship of `path1` to `path2`.
    #[must_use]
    pub fn between(path1: &HierarchicalPath, path2: &HierarchicalPath) -> Self {
        if path1 == path2 {
            Self::Same
        } else if path1.is_ancestor_of(path2) {
            Self::Ancestor
        } else if path2.is_ancestor_of(path1) {
            Self::Descendant
        } else {
            Self::Unrelated
        }
    }

    /// Whether the paths lie on one branch (not unrelated).
    ///
    /// # Examples
    ///
    /// ```
    /// use encanto::path::PathRelationship;
    ///
    /// assert!(PathRelationship::Ancestor.is_hierarchical());
    /// assert!(PathRelationship::Same.is_hierarchical());
    /// assert!(!PathRelationship::Unrelated.is_hierarchical());
    /// ```
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Whether `path1` is the direct parent of `path2`.
    #[must_use]
    pub fn is_parent_of(path1: &HierarchicalPath, path2: &HierarchicalPath) -> bool {
        Self::between(path1, path2) == Self::Ancestor && path2.len() == path1.len() + 1
    }
}

impl std::fmt::Display for PathRelationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ancestor => write!(f, "ancestor"),
            Self::Descendant => write!(f, "descendant"),
            Self::Same => write!(f, "same"),
            Self::Unrelated => write!(f, "unrelated"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> HierarchicalPath {
        s.parse().unwrap()
    }

    #[test]
    fn test_same() {
        assert_eq!(
            PathRelationship::between(&p("A.B"), &p("A.B")),
            PathRelationship::Same
        );
    }

    #[test]
    fn test_ancestor_and_descendant() {
        assert_eq!(
            PathRelationship::between(&p("A"), &p("A.B.C")),
            PathRelationship::Ancestor
        );
        assert_eq!(
            PathRelationship::between(&p("A.B.C"), &p("A")),
            PathRelationship::Descendant
        );
    }

    #[test]
    fn test_label_boundaries() {
        assert_eq!(
            PathRelationship::between(&p("A.B"), &p("A.Bc")),
            PathRelationship::Unrelated
        );
    }

    #[test]
    fn test_siblings_unrelated() {
        let rel = PathRelationship::between(&p("Home.Garden"), &p("Home.Kitchen"));
        assert_eq!(rel, PathRelationship::Unrelated);
        assert!(!rel.is_hierarchical());
    }

    #[test]
    fn test_is_parent_of() {
        assert!(PathRelationship::is_parent_of(&p("A"), &p("A.B")));
        assert!(!PathRelationship::is_parent_of(&p("A"), &p("A.B.C")));
        assert!(!PathRelationship::is_parent_of(&p("A.B"), &p("A")));
    }

    #[test]
    fn test_display() {
        assert_eq!(PathRelationship::Ancestor.to_string(), "ancestor");
        assert_eq!(PathRelationship::Unrelated.to_string(), "unrelated");
    }
}
