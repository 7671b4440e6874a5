//! Exact-match checks over plain sequences.
//!
//! These take slices rather than containers, and compare whole elements with
//! `PartialEq`. Repeated elements count: `[1, 1, 2]` does not match `[1, 2, 2]`.

use super::observe;
use super::validation::{
    validate_expectation_array_not_null, validate_expectation_not_empty, validate_not_null,
    Polarity, Precheck,
};
use crate::diff::{self, IndexMismatch};
use crate::errors::{ExpectationShape, SequenceError};
use collex_core_types::ops;
use std::fmt::Debug;

pub type SequenceResult<T> = Result<(), SequenceError<T>>;

/// Succeeds if `actual` and `values` hold the same elements with the same
/// multiplicities, in any order.
///
/// # Errors
/// - Precondition failures
/// - `ShouldHaveSameSizeAs` when the lengths differ
/// - `ShouldContainExactlyInAnyOrder` carrying `not_expected` and `not_found`
pub fn contains_exactly_in_any_order<T>(
    actual: Option<&[T]>,
    values: Option<&[T]>,
) -> SequenceResult<T>
where
    T: PartialEq + Clone + Debug,
{
    observe(ops::CONTAINS_EXACTLY_IN_ANY_ORDER, || -> SequenceResult<T> {
        let Some((actual, values)) = precheck(actual, values)? else {
            return Ok(());
        };
        check_sizes(actual, values)?;

        let diff = diff::multiset(actual, values);
        if diff.is_clean() {
            return Ok(());
        }
        Err(SequenceError::ShouldContainExactlyInAnyOrder {
            actual: actual.to_vec(),
            expected: values.to_vec(),
            diff,
        })
    })
}

/// Succeeds if `actual` equals `values` element by element.
///
/// Sizes are compared first, then content as a multiset, and only when the
/// content agrees is the first out-of-place index reported.
///
/// # Errors
/// - Precondition failures
/// - `ShouldHaveSameSizeAs` when the lengths differ
/// - `ShouldContainExactly` when the content differs
/// - `ElementsDifferAtIndex` at the first position holding different elements
pub fn contains_exactly_in_order<T>(actual: Option<&[T]>, values: Option<&[T]>) -> SequenceResult<T>
where
    T: PartialEq + Clone + Debug,
{
    observe(ops::CONTAINS_EXACTLY_IN_ORDER, || -> SequenceResult<T> {
        let Some((actual, values)) = precheck(actual, values)? else {
            return Ok(());
        };
        check_sizes(actual, values)?;

        let diff = diff::multiset(actual, values);
        if !diff.is_clean() {
            return Err(SequenceError::ShouldContainExactly {
                actual: actual.to_vec(),
                expected: values.to_vec(),
                diff,
            });
        }

        match actual.iter().zip(values).position(|(a, e)| a != e) {
            Some(index) => Err(SequenceError::ElementsDifferAtIndex(IndexMismatch {
                index,
                actual: actual[index].clone(),
                expected: values[index].clone(),
            })),
            None => Ok(()),
        }
    })
}

fn precheck<'a, T: Debug>(
    actual: Option<&'a [T]>,
    values: Option<&'a [T]>,
) -> Result<Option<(&'a [T], &'a [T])>, SequenceError<T>> {
    let actual = validate_not_null(actual)?;
    let values = validate_expectation_array_not_null(values, ExpectationShape::Elements)?;
    match validate_expectation_not_empty(
        actual.is_empty(),
        values.len(),
        ExpectationShape::Elements,
        Polarity::Presence,
    )? {
        Precheck::VacuousSuccess => Ok(None),
        Precheck::Proceed => Ok(Some((actual, values))),
    }
}

fn check_sizes<T: Clone + Debug>(actual: &[T], values: &[T]) -> SequenceResult<T> {
    if actual.len() == values.len() {
        return Ok(());
    }
    Err(SequenceError::ShouldHaveSameSizeAs {
        actual_size: actual.len(),
        expected_size: values.len(),
        actual: actual.to_vec(),
        expected: values.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PreconditionError;

    #[test]
    fn test_any_order_accepts_permutation() {
        let actual = ["a", "b", "c"];
        let values = ["c", "a", "b"];
        assert_eq!(
            contains_exactly_in_any_order(Some(&actual[..]), Some(&values[..])),
            Ok(())
        );
    }

    #[test]
    fn test_any_order_respects_multiplicity() {
        let actual = [1, 1, 2];
        let values = [1, 2, 2];
        let err = contains_exactly_in_any_order(Some(&actual[..]), Some(&values[..])).unwrap_err();
        match err {
            SequenceError::ShouldContainExactlyInAnyOrder { diff, .. } => {
                assert_eq!(diff.not_found, vec![2]);
                assert_eq!(diff.not_expected, vec![1]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_in_order_reports_first_index() {
        let actual = [1, 2, 3];
        let values = [1, 3, 2];
        assert_eq!(
            contains_exactly_in_order(Some(&actual[..]), Some(&values[..])),
            Err(SequenceError::ElementsDifferAtIndex(IndexMismatch {
                index: 1,
                actual: 2,
                expected: 3,
            }))
        );
    }

    #[test]
    fn test_size_mismatch_precedes_content() {
        let actual = [1, 2];
        let values = [3];
        assert!(matches!(
            contains_exactly_in_order(Some(&actual[..]), Some(&values[..])),
            Err(SequenceError::ShouldHaveSameSizeAs {
                actual_size: 2,
                expected_size: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_null_and_empty_handling() {
        let empty: [i32; 0] = [];
        assert_eq!(
            contains_exactly_in_any_order::<i32>(None, Some(&empty[..])),
            Err(SequenceError::Precondition(PreconditionError::ActualIsNull))
        );
        assert_eq!(
            contains_exactly_in_any_order(Some(&empty[..]), Some(&empty[..])),
            Ok(())
        );
        assert_eq!(
            contains_exactly_in_any_order(Some(&[1][..]), Some(&empty[..])),
            Err(SequenceError::Precondition(
                PreconditionError::EmptyExpectation {
                    shape: ExpectationShape::Elements
                }
            ))
        );
    }
}
