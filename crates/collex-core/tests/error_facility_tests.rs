#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use collex_core::engine::{contains, contains_exactly, contains_only_keys, has_size};
use collex_core::errors::{ExError, ExErrorKind};
use collex_core::{entry, DiffResult, SequenceError};
use collex_core_types::ops;
use common::{entries, two_keys, yoda};
use serde_json::json;

#[test]
fn test_content_failure_verifiable_by_kind() {
    let actual = two_keys();
    let err = contains_only_keys(Some(&actual), Some(&["key1"][..])).unwrap_err();

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::ContentMismatch);
    assert_eq!(ex_err.code(), "ERR_CONTENT_MISMATCH");
    assert!(!ex_err.kind().is_precondition());
    assert!(ex_err.message().contains("unexpected [\"key2\"]"));
}

#[test]
fn test_size_failure_distinct_from_content_failure() {
    let actual = yoda();

    let ex_err: ExError = has_size(Some(&actual), 5).unwrap_err().into();

    assert_eq!(ex_err.kind(), ExErrorKind::SizeMismatch);
    assert_ne!(ex_err.kind(), ExErrorKind::ContentMismatch);
    assert!(ex_err.message().starts_with("Expected size 5 but was 2"));
}

#[test]
fn test_order_failure_message_names_index() {
    let actual = yoda();
    let expected = [entry("color", "green"), entry("name", "Yoda")];

    let err = contains_exactly(Some(&actual), Some(&expected[..])).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Actual and expected have the same entries but not in the same order, at index 0 \
         actual entry was Entry { key: \"name\", value: \"Yoda\" } whereas expected entry was \
         Entry { key: \"color\", value: \"green\" }"
    );
}

#[test]
fn test_engine_failure_carries_operation_name() {
    let actual = yoda();
    let expected = entries(&[("job", "Jedi")]);

    let err = contains(Some(&actual), Some(expected.as_slice())).unwrap_err();
    let ex_err = err.to_ex_error(ops::CONTAINS);

    assert_eq!(ex_err.op(), Some("contains"));
    assert_eq!(ex_err.kind(), ExErrorKind::ContentMismatch);
    assert!(ex_err
        .to_string()
        .starts_with("[ERR_CONTENT_MISMATCH] in operation 'contains': Expecting"));
}

#[test]
fn test_sequence_error_converts_with_code() {
    let err: SequenceError<i32> = SequenceError::ShouldHaveSameSizeAs {
        actual_size: 1,
        expected_size: 2,
        actual: vec![1],
        expected: vec![1, 2],
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.code(), "ERR_SIZE_MISMATCH");
    assert_eq!(ex_err.op(), None);
    assert_eq!(
        ex_err.with_op("contains_exactly_in_order").op(),
        Some("contains_exactly_in_order")
    );
}

#[test]
fn test_diff_payload_serializes() {
    let actual = yoda();
    let err = contains_only_keys(Some(&actual), Some(&["name", "job"][..])).unwrap_err();

    let diff = match err {
        collex_core::ContainmentError::ShouldContainOnlyKeys { diff, .. } => diff,
        other => panic!("unexpected error: {other:?}"),
    };

    let value = serde_json::to_value(&diff).unwrap();
    assert_eq!(
        value,
        json!({ "not_found": ["job"], "not_expected": ["color"], "found": [] })
    );

    let back: DiffResult<String> = serde_json::from_value(value).unwrap();
    assert_eq!(back.not_expected, vec!["color".to_string()]);
}
