//! Property-based tests for hierarchical paths.

use super::normalize::{normalize, validate_and_normalize};
use super::relationship::PathRelationship;
use super::types::{HierarchicalPath, PathInput};
use proptest::prelude::*;
use std::collections::BTreeSet;

use super::ancestry::AncestorIndex;

fn label_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _-]{1,16}"
}

fn labels_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(label_strategy(), 1..8)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // parse(to_string(parse(L))) == parse(L)
    #[test]
    fn round_trip_through_canonical_form(labels in labels_strategy()) {
        let path = HierarchicalPath::parse(PathInput::Labels(labels), ".").unwrap();
        let reparsed: HierarchicalPath = path.to_string().parse().unwrap();
        prop_assert_eq!(reparsed, path);
    }

    #[test]
    fn round_trip_with_custom_separator(labels in labels_strategy()) {
        let path = HierarchicalPath::from_labels(labels).unwrap();
        let text = path.to_string_with("/");
        let reparsed = HierarchicalPath::from_delimited(&text, "/").unwrap();
        prop_assert_eq!(reparsed, path);
    }

    #[test]
    fn normalization_idempotent(labels in labels_strategy()) {
        let path = HierarchicalPath::from_labels(labels).unwrap();
        let once = normalize(&path);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalization_preserves_shape(labels in labels_strategy()) {
        let path = HierarchicalPath::from_labels(labels).unwrap();
        let normalized = normalize(&path);
        prop_assert_eq!(normalized.len(), path.len());
        for (before, after) in path.labels().iter().zip(normalized.labels()) {
            // Only the first character may change.
            let tail_before: String = before.chars().skip(1).collect();
            let tail_after: String = after.chars().skip(1).collect();
            prop_assert_eq!(tail_before, tail_after);
        }
    }

    #[test]
    fn parent_is_ancestor(labels in prop::collection::vec(label_strategy(), 2..8)) {
        let path = HierarchicalPath::from_labels(labels).unwrap();
        let parent = path.parent().unwrap();
        prop_assert!(PathRelationship::is_parent_of(&parent, &path));
    }

    // A stored path always satisfies the prefix query for each of its ancestors.
    #[test]
    fn index_finds_every_ancestor(labels in labels_strategy()) {
        let validated = validate_and_normalize(&HierarchicalPath::from_labels(labels).unwrap()).unwrap();
        let mut index = BTreeSet::new();
        index.insert(validated.path().to_string());
        for ancestor in validated.path().ancestors() {
            prop_assert!(index.contains_prefix(&ancestor).unwrap());
        }
    }
}
