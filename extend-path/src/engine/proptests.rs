//! Property-based tests for the directory list operations.

use super::*;
use proptest::prelude::*;

// Small alphabet so that generated lists frequently share entries.
fn directory_strategy() -> impl Strategy<Value = Directory> {
    ("/(usr|opt|home|bin)(/[a-c]{1,2}){0,2}", "[/\\\\]{0,2}")
        .prop_map(|(body, trailing)| Directory::new(format!("{body}{trailing}")))
}

fn list_strategy() -> impl Strategy<Value = Vec<Directory>> {
    prop::collection::vec(directory_strategy(), 0..12)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn filter_with_nothing_is_identity(list in list_strategy()) {
        prop_assert_eq!(filter(&list, &[]), list);
    }

    #[test]
    fn filter_with_self_is_empty(list in list_strategy()) {
        prop_assert!(filter(&list, &list).is_empty());
    }

    #[test]
    fn filter_preserves_order(list in list_strategy(), exclude in list_strategy()) {
        let filtered = filter(&list, &exclude);
        let mut remaining = list.iter();
        for entry in &filtered {
            prop_assert!(remaining.any(|candidate| candidate == entry));
        }
    }

    #[test]
    fn delete_is_idempotent(entries in list_strategy(), list in list_strategy()) {
        let once = delete(&entries, &list);
        prop_assert_eq!(delete(&entries, &once), once);
    }

    #[test]
    fn delete_leaves_no_entry_behind(entries in list_strategy(), list in list_strategy()) {
        let result = delete(&entries, &list);
        for entry in &entries {
            prop_assert!(!contains(&result, entry));
        }
    }

    #[test]
    fn verify_matches_missing(entries in list_strategy(), list in list_strategy()) {
        prop_assert_eq!(verify(&entries, &list), missing(&entries, &list).is_empty());
    }

    #[test]
    fn verify_empty_entries(list in list_strategy()) {
        prop_assert!(verify(&[], &list));
    }

    #[test]
    fn inserted_entries_verify(entries in list_strategy(), list in list_strategy(), relocate in any::<bool>()) {
        prop_assert!(verify(&entries, &append(&entries, &list, relocate)));
        prop_assert!(verify(&entries, &prepend(&entries, &list, relocate)));
    }

    #[test]
    fn append_without_relocate_keeps_list_as_prefix(entries in list_strategy(), list in list_strategy()) {
        let result = append(&entries, &list, false);
        prop_assert_eq!(&result[..list.len()], &list[..]);
    }

    #[test]
    fn prepend_without_relocate_keeps_list_as_suffix(entries in list_strategy(), list in list_strategy()) {
        let result = prepend(&entries, &list, false);
        prop_assert_eq!(&result[result.len() - list.len()..], &list[..]);
    }

    #[test]
    fn append_with_relocate_ends_with_entries(entries in list_strategy(), list in list_strategy()) {
        let result = append(&entries, &list, true);
        prop_assert_eq!(&result[result.len() - entries.len()..], &entries[..]);
    }

    #[test]
    fn prepend_with_relocate_starts_with_entries(entries in list_strategy(), list in list_strategy()) {
        let result = prepend(&entries, &list, true);
        prop_assert_eq!(&result[..entries.len()], &entries[..]);
    }

    #[test]
    fn equivalence_is_symmetric(a in directory_strategy(), b in directory_strategy()) {
        prop_assert_eq!(equivalent(&a, &b), equivalent(&b, &a));
    }
}
