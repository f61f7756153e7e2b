//! Property-based tests for normalization and list serialization.

use super::list::{join_list, split_list, LIST_SEPARATOR};
use super::normalize::normalize;
use crate::directory::Directory;
use proptest::prelude::*;
use std::path::PathBuf;

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 1..8).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

fn entry_strategy() -> impl Strategy<Value = Directory> {
    "[a-zA-Z0-9_/.\\\\ -]{0,30}".prop_map(Directory::new)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        .. ProptestConfig::default()
    })]

    // normalize(normalize(p)) == normalize(p)
    #[test]
    fn path_normalization_idempotent(path in absolute_path_strategy()) {
        let once = normalize(&path).unwrap();
        let twice = normalize(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalized_paths_no_parent_refs(path in absolute_path_strategy(), ups in 0..4usize) {
        let mut dotted = path.clone();
        for _ in 0..ups {
            dotted.push("..");
        }
        let normalized = normalize(&dotted).unwrap();
        prop_assert!(!normalized.to_string_lossy().contains(".."));
    }

    // Non-empty lists without separators survive serialization unchanged.
    #[test]
    fn join_then_split_round_trips(entries in prop::collection::vec(entry_strategy(), 1..10)) {
        prop_assume!(entries.iter().all(|e| !e.as_str().contains(LIST_SEPARATOR)));
        prop_assume!(!(entries.len() == 1 && entries[0].as_str().is_empty()));
        prop_assert_eq!(split_list(&join_list(&entries)), entries);
    }
}
