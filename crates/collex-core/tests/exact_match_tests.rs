#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use collex_core::engine::{contains_exactly, contains_exactly_in_any_order, contains_only};
use collex_core::{entry, ContainmentError, ExErrorKind, IndexMismatch, Multimap, SequenceError};
use common::{entries, teams, yoda};
use indexmap::IndexMap;
use std::collections::HashMap;

fn abc() -> IndexMap<&'static str, i32> {
    IndexMap::from([("a", 1), ("b", 2), ("c", 3)])
}

#[test]
fn test_order_mismatch_reports_first_differing_index() {
    // GIVEN an insertion-ordered map [(a,1),(b,2),(c,3)]
    let actual = abc();

    // WHEN expecting the same entries as (a,1),(c,3),(b,2)
    let expected = [entry("a", 1), entry("c", 3), entry("b", 2)];
    let err = contains_exactly(Some(&actual), Some(&expected[..])).unwrap_err();

    // THEN the failure is an order mismatch at index 1
    assert_eq!(err.kind(), ExErrorKind::OrderMismatch);
    assert_eq!(
        err,
        ContainmentError::ElementsDifferAtIndex(IndexMismatch {
            index: 1,
            actual: entry("b", 2),
            expected: entry("c", 3),
        })
    );
}

#[test]
fn test_size_mismatch_reports_sizes_and_both_collections() {
    // GIVEN a 2-entry actual and a 1-entry expectation
    let actual = yoda();
    let expected = entries(&[("name", "Yoda")]);

    // WHEN checking for an exact match
    let err = contains_exactly(Some(&actual), Some(expected.as_slice())).unwrap_err();

    // THEN the size is reported before any content diff
    assert_eq!(err.kind(), ExErrorKind::SizeMismatch);
    assert_eq!(
        err,
        ContainmentError::ShouldHaveSameSizeAs {
            actual_size: 2,
            expected_size: 1,
            actual: entries(&[("name", "Yoda"), ("color", "green")]),
            expected,
        }
    );
}

#[test]
fn test_unordered_container_ignores_order() {
    let actual: HashMap<_, _> = abc().into_iter().collect();
    let expected = [entry("c", 3), entry("a", 1), entry("b", 2)];
    assert_eq!(contains_exactly(Some(&actual), Some(&expected[..])), Ok(()));
}

#[test]
fn test_hashed_multimap_ignores_order() {
    let actual = Multimap::hashed_of([("x", 1), ("y", 2)]);
    let expected = [entry("y", 2), entry("x", 1)];
    assert_eq!(contains_exactly(Some(&actual), Some(&expected[..])), Ok(()));
}

#[test]
fn test_multimap_repeated_pairs_count_toward_content() {
    // GIVEN multimaps where (b,2) appears twice
    let hashed = Multimap::hashed_of([("a", 1), ("b", 2), ("b", 2)]);
    let linked = Multimap::linked_of([("a", 1), ("b", 2), ("b", 2)]);

    // WHEN expecting (a,1) twice and (b,2) once
    let expected = [entry("a", 1), entry("a", 1), entry("b", 2)];

    // THEN both report a content mismatch, not success or an order mismatch
    for err in [
        contains_exactly(Some(&hashed), Some(&expected[..])).unwrap_err(),
        contains_exactly(Some(&linked), Some(&expected[..])).unwrap_err(),
    ] {
        assert_eq!(err.kind(), ExErrorKind::ContentMismatch);
        match err {
            ContainmentError::ShouldContainExactly { diff, .. } => {
                assert_eq!(diff.not_found, vec![entry("a", 1)]);
                assert_eq!(diff.not_expected, vec![entry("b", 2)]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

#[test]
fn test_multimap_repeated_pairs_match_in_order() {
    let actual = Multimap::linked_of([("a", 1), ("b", 2), ("b", 2)]);
    let expected = [entry("a", 1), entry("b", 2), entry("b", 2)];
    assert_eq!(contains_exactly(Some(&actual), Some(&expected[..])), Ok(()));
}

#[test]
fn test_content_mismatch_is_not_an_order_mismatch() {
    let actual = abc();
    let expected = [entry("a", 1), entry("b", 2), entry("d", 4)];

    let err = contains_exactly(Some(&actual), Some(&expected[..])).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ContentMismatch);
    match err {
        ContainmentError::ShouldContainExactly {
            diff, expected: e, ..
        } => {
            assert_eq!(diff.not_found, vec![entry("d", 4)]);
            assert_eq!(diff.not_expected, vec![entry("c", 3)]);
            assert_eq!(e, expected.to_vec());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_multimap_exact_match_in_key_order() {
    let actual = teams();
    let expected = entries(&[
        ("Lakers", "Kareem Abdul Jabbar"),
        ("Lakers", "Kobe Bryant"),
        ("Lakers", "Magic Johnson"),
        ("Bulls", "Michael Jordan"),
        ("Bulls", "Derrick Rose"),
        ("Bulls", "Scottie Pippen"),
        ("Spurs", "Manu Ginobili"),
        ("Spurs", "Tim Duncan"),
        ("Spurs", "Tony Parker"),
    ]);
    assert_eq!(contains_exactly(Some(&actual), Some(expected.as_slice())), Ok(()));
}

#[test]
fn test_empty_against_empty_is_vacuous() {
    let actual: IndexMap<&str, i32> = IndexMap::new();
    let none: [collex_core::Entry<&str, i32>; 0] = [];

    assert_eq!(contains_exactly(Some(&actual), Some(&none[..])), Ok(()));
    assert_eq!(contains_only(Some(&actual), Some(&none[..])), Ok(()));
}

#[test]
fn test_sequence_form() {
    let actual = ["Luke", "Yoda", "Leia"];

    assert_eq!(
        contains_exactly_in_any_order(Some(&actual[..]), Some(&["Leia", "Luke", "Yoda"][..])),
        Ok(())
    );

    let err = contains_exactly_in_any_order(Some(&actual[..]), Some(&["Luke", "Yoda", "Han"][..]))
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ContentMismatch);
    match err {
        SequenceError::ShouldContainExactlyInAnyOrder { diff, .. } => {
            assert_eq!(diff.not_found, vec!["Han"]);
            assert_eq!(diff.not_expected, vec!["Leia"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
