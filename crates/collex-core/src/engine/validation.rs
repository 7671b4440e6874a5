//! Precondition validation shared by every engine operation.
//!
//! Order of checks is fixed: actual not null, expectation not null, then the
//! emptiness rules. Emptiness has one deliberate special case: an empty actual
//! against an empty expectation is a vacuous success, not an error.

use crate::container::{AssociativeContainer, Entry};
use crate::errors::{ExpectationShape, PreconditionError};

/// Whether an operation asserts presence or absence.
///
/// Presence checks cannot hold against an empty actual, so a non-empty
/// expectation there is rejected as misuse. Absence checks hold trivially.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Presence,
    Absence,
}

/// Result of the emptiness rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precheck {
    /// Both sides empty; the operation succeeds without comparing
    VacuousSuccess,
    /// Run the comparison
    Proceed,
}

/// Reject an absent actual container.
///
/// # Errors
/// `ActualIsNull` when `actual` is `None`.
pub fn validate_not_null<T: ?Sized>(actual: Option<&T>) -> Result<&T, PreconditionError> {
    actual.ok_or(PreconditionError::ActualIsNull)
}

/// Reject an absent expectation array.
///
/// # Errors
/// `NullExpectation` when `expected` is `None`.
pub fn validate_expectation_array_not_null<T>(
    expected: Option<&[T]>,
    shape: ExpectationShape,
) -> Result<&[T], PreconditionError> {
    expected.ok_or(PreconditionError::NullExpectation { shape })
}

/// Apply the emptiness rules.
///
/// # Errors
/// - `EmptyExpectation` when the expectation is empty but actual is not
/// - `ActualIsEmpty` when a presence check is asked of an empty actual
pub fn validate_expectation_not_empty(
    actual_is_empty: bool,
    expected_len: usize,
    shape: ExpectationShape,
    polarity: Polarity,
) -> Result<Precheck, PreconditionError> {
    match (actual_is_empty, expected_len == 0) {
        (true, true) => Ok(Precheck::VacuousSuccess),
        (false, true) => Err(PreconditionError::EmptyExpectation { shape }),
        (true, false) if polarity == Polarity::Presence => {
            Err(PreconditionError::ActualIsEmpty {
                shape,
                expected_len,
            })
        }
        _ => Ok(Precheck::Proceed),
    }
}

/// Reject an absent element of an expectation array.
///
/// # Errors
/// `NullEntry` carrying the element's index.
pub fn validate_entry_not_null<T>(entry: Option<&T>, index: usize) -> Result<&T, PreconditionError> {
    entry.ok_or(PreconditionError::NullEntry { index })
}

/// Convert a boundary array that may contain holes into entries, failing
/// on the first hole.
///
/// # Errors
/// `NullEntry` for the first `None` element.
pub fn entries_from_nullable<K: Clone, V: Clone>(
    raw: &[Option<(K, V)>],
) -> Result<Vec<Entry<K, V>>, PreconditionError> {
    raw.iter()
        .enumerate()
        .map(|(index, slot)| {
            validate_entry_not_null(slot.as_ref(), index)
                .map(|(k, v)| Entry::new(k.clone(), v.clone()))
        })
        .collect()
}

/// Run the full precondition chain for an array-shaped expectation.
///
/// Returns `None` on vacuous success, otherwise the validated pair.
pub(crate) fn precheck<'a, C, T>(
    actual: Option<&'a C>,
    expected: Option<&'a [T]>,
    shape: ExpectationShape,
    polarity: Polarity,
) -> Result<Option<(&'a C, &'a [T])>, PreconditionError>
where
    C: AssociativeContainer + ?Sized,
{
    let actual = validate_not_null(actual)?;
    let expected = validate_expectation_array_not_null(expected, shape)?;
    match validate_expectation_not_empty(actual.is_empty(), expected.len(), shape, polarity)? {
        Precheck::VacuousSuccess => {
            tracing::debug!(shape = %shape, "both actual and expectation empty");
            Ok(None)
        }
        Precheck::Proceed => Ok(Some((actual, expected))),
    }
}
