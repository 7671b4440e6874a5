//! Property tests for the containment engine.

use collex_core::engine::{
    contains, contains_exactly_in_any_order, contains_exactly_in_order, contains_only,
    does_not_contain,
};
use collex_core::{entry, ContainmentError, Entry};
use proptest::prelude::*;
use std::collections::HashMap;

type Actual = HashMap<String, i32>;

fn non_empty_map(keys: &'static str) -> impl Strategy<Value = Actual> {
    prop::collection::hash_map(keys, 0..4i32, 1..4)
}

/// A map together with a non-empty selection of its own entries
fn map_and_subset() -> impl Strategy<Value = (Actual, Vec<Entry<String, i32>>)> {
    non_empty_map("[a-h]").prop_flat_map(|m| {
        let all: Vec<_> = m.iter().map(|(k, v)| entry(k.clone(), *v)).collect();
        let len = all.len();
        (Just(m), prop::sample::subsequence(all, 1..=len))
    })
}

fn entries_under(keys: &'static str) -> impl Strategy<Value = Vec<Entry<String, i32>>> {
    prop::collection::vec((keys, 0..4i32).prop_map(|(k, v)| entry(k, v)), 1..6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Any non-empty selection of a container's own entries is contained
    #[test]
    fn contains_own_entries((actual, subset) in map_and_subset()) {
        prop_assert_eq!(contains(Some(&actual), Some(subset.as_slice())), Ok(()));
    }

    /// Entries under keys the actual never uses are never found
    #[test]
    fn disjoint_keys_are_excluded(
        actual in non_empty_map("[a-d]"),
        excluded in entries_under("[e-h]"),
    ) {
        prop_assert_eq!(does_not_contain(Some(&actual), Some(excluded.as_slice())), Ok(()));
    }

    /// The two diff sets of `contains_only` are exactly the one-sided differences
    #[test]
    fn contains_only_diff_is_one_sided(
        actual in non_empty_map("[a-e]"),
        wanted in entries_under("[a-e]"),
    ) {
        // Repeated keys overwrite, last one wins
        let expected: HashMap<String, i32> =
            wanted.iter().map(|e| (e.key.clone(), e.value)).collect();
        let extra = actual
            .iter()
            .filter(|(k, v)| expected.get(*k) != Some(*v))
            .count();
        let missing = expected
            .iter()
            .filter(|(k, v)| actual.get(*k) != Some(*v))
            .count();

        match contains_only(Some(&actual), Some(wanted.as_slice())) {
            Ok(()) => prop_assert_eq!(extra, 0),
            Err(ContainmentError::ShouldContainOnly { diff, .. }) => {
                prop_assert!(extra > 0);
                prop_assert_eq!(diff.not_expected.len(), extra);
                prop_assert_eq!(diff.not_found.len(), missing);
                for e in &diff.not_expected {
                    prop_assert_eq!(actual.get(&e.key), Some(&e.value));
                    prop_assert_ne!(expected.get(&e.key), Some(&e.value));
                }
                for e in &diff.not_found {
                    prop_assert_eq!(expected.get(&e.key), Some(&e.value));
                    prop_assert_ne!(actual.get(&e.key), Some(&e.value));
                }
            }
            Err(other) => prop_assert!(false, "unexpected error: {:?}", other),
        }
    }

    /// A permutation always matches in any order
    #[test]
    fn permutation_matches_in_any_order(
        (values, shuffled) in prop::collection::vec(0..5i32, 1..8)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        prop_assert_eq!(
            contains_exactly_in_any_order(Some(values.as_slice()), Some(shuffled.as_slice())),
            Ok(())
        );
    }

    /// A sequence always matches itself in order
    #[test]
    fn sequence_matches_itself_in_order(values in prop::collection::vec(any::<i32>(), 1..8)) {
        prop_assert_eq!(
            contains_exactly_in_order(Some(values.as_slice()), Some(values.as_slice())),
            Ok(())
        );
    }
}
