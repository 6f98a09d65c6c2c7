//! Hierarchical category paths.
//!
//! A category's place in the tree is a [`HierarchicalPath`]: an ordered list
//! of labels such as `["Electronics", "Phones"]`, stored in canonical form as
//! `Electronics.Phones`.
//!
//! # Writing a path
//!
//! Saving a category runs two explicit steps, both inside the storage
//! transaction that writes the row:
//!
//! 1. [`validate_and_normalize`] capitalizes every label and computes the
//!    ancestor prefix.
//! 2. [`ensure_ancestor`] asks an [`AncestorIndex`] whether that prefix is
//!    already stored, failing with
//!    [`Error::MissingAncestor`](crate::Error::MissingAncestor) otherwise.
//!
//! ```
//! use std::collections::BTreeSet;
//! use encanto::path::{ensure_ancestor, validate_and_normalize, HierarchicalPath};
//!
//! let mut stored = BTreeSet::new();
//!
//! let root = validate_and_normalize(&"electronics".parse().unwrap()).unwrap();
//! ensure_ancestor(&stored, &root).unwrap();
//! stored.insert(root.path().to_string());
//!
//! let child = validate_and_normalize(&"electronics.phones".parse().unwrap()).unwrap();
//! ensure_ancestor(&stored, &child).unwrap();
//! assert_eq!(child.path().to_string(), "Electronics.Phones");
//! ```
//!
//! Changing or removing a path never touches the paths below it.

pub mod ancestry;
pub mod normalize;
pub mod relationship;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use ancestry::{ensure_ancestor, AncestorIndex};
pub use normalize::{validate_and_normalize, ValidatedPath};
pub use relationship::PathRelationship;
pub use types::{HierarchicalPath, PathInput, DEFAULT_SEPARATOR};
