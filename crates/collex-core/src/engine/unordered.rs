//! Containment checks that are insensitive to iteration order.
//!
//! Entry checks compare a key *and* its value; for multimaps an expected entry
//! matches when its value is any one of the key's values. Key checks work on
//! the key projection and value checks on the flattened value projection.

use super::validation::{precheck, validate_not_null, Polarity};
use super::{expected_container, observe, Condition, ContainmentResult, EntriesOf};
use crate::container::{AssociativeContainer, Entry};
use crate::diff::{self, DiffResult};
use crate::errors::{ContainmentError, ExpectationShape};
use collex_core_types::ops;
use std::collections::HashSet;
use std::slice;

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// Succeeds if at least one of `entries` is present in `actual`.
///
/// Stops scanning at the first match.
///
/// # Errors
/// - Precondition failures (see [`validation`](super::validation))
/// - `ShouldContainAnyOf` when none of the entries is present
pub fn contains_any_of<C: AssociativeContainer>(
    actual: Option<&C>,
    entries: Option<&EntriesOf<C>>,
) -> ContainmentResult<C> {
    observe(ops::CONTAINS_ANY_OF, || contains_any_of_impl(actual, entries))
}

fn contains_any_of_impl<C: AssociativeContainer>(
    actual: Option<&C>,
    entries: Option<&EntriesOf<C>>,
) -> ContainmentResult<C> {
    let Some((actual, entries)) = precheck(
        actual,
        entries,
        ExpectationShape::Entries,
        Polarity::Presence,
    )?
    else {
        return Ok(());
    };

    if entries
        .iter()
        .any(|e| actual.contains_entry(&e.key, &e.value))
    {
        return Ok(());
    }
    Err(ContainmentError::ShouldContainAnyOf {
        actual: actual.to_entries(),
        expected: entries.to_vec(),
    })
}

/// Succeeds if every one of `entries` is present in `actual`.
///
/// # Errors
/// - Precondition failures
/// - `ShouldContain` carrying the entries that were not found
pub fn contains<C: AssociativeContainer>(
    actual: Option<&C>,
    entries: Option<&EntriesOf<C>>,
) -> ContainmentResult<C> {
    observe(ops::CONTAINS, || contains_impl(actual, entries))
}

/// [`contains`] for a single entry.
///
/// # Errors
/// As [`contains`].
pub fn contains_entry<C: AssociativeContainer>(
    actual: Option<&C>,
    key: C::Key,
    value: C::Value,
) -> ContainmentResult<C> {
    let expected = Entry::new(key, value);
    observe(ops::CONTAINS_ENTRY, || {
        contains_impl(actual, Some(slice::from_ref(&expected)))
    })
}

/// [`contains`] sourced from any iterable of entries instead of a slice.
///
/// # Errors
/// As [`contains`].
pub fn contains_all_entries_of<C, I>(actual: Option<&C>, entries: Option<I>) -> ContainmentResult<C>
where
    C: AssociativeContainer,
    I: IntoIterator<Item = Entry<C::Key, C::Value>>,
{
    observe(ops::CONTAINS_ALL_ENTRIES_OF, || {
        let entries: Option<Vec<_>> = entries.map(|it| it.into_iter().collect());
        contains_impl(actual, entries.as_deref())
    })
}

/// [`contains`] sourced from the flattened entries of another container.
///
/// # Errors
/// As [`contains`]; a `None` container is a `NullExpectation`.
pub fn contains_all_entries_of_container<C, O>(
    actual: Option<&C>,
    other: Option<&O>,
) -> ContainmentResult<C>
where
    C: AssociativeContainer,
    O: AssociativeContainer<Key = C::Key, Value = C::Value>,
{
    observe(ops::CONTAINS_ALL_ENTRIES_OF, || {
        let entries = other.map(AssociativeContainer::to_entries);
        contains_impl(actual, entries.as_deref())
    })
}

fn contains_impl<C: AssociativeContainer>(
    actual: Option<&C>,
    entries: Option<&EntriesOf<C>>,
) -> ContainmentResult<C> {
    let Some((actual, entries)) = precheck(
        actual,
        entries,
        ExpectationShape::Entries,
        Polarity::Presence,
    )?
    else {
        return Ok(());
    };

    let not_found = diff::absent(entries, |e| actual.contains_entry(&e.key, &e.value));
    if not_found.is_empty() {
        return Ok(());
    }
    tracing::debug!(not_found = not_found.len(), "entries missing from actual");
    Err(ContainmentError::ShouldContain {
        actual: actual.to_entries(),
        expected: entries.to_vec(),
        diff: DiffResult::not_found(not_found),
    })
}

/// Succeeds if none of `entries` is present in `actual`.
///
/// # Errors
/// - Precondition failures
/// - `ShouldNotContain` carrying the entries that were found
pub fn does_not_contain<C: AssociativeContainer>(
    actual: Option<&C>,
    entries: Option<&EntriesOf<C>>,
) -> ContainmentResult<C> {
    observe(ops::DOES_NOT_CONTAIN, || does_not_contain_impl(actual, entries))
}

/// [`does_not_contain`] for a single entry.
///
/// # Errors
/// As [`does_not_contain`].
pub fn does_not_contain_entry<C: AssociativeContainer>(
    actual: Option<&C>,
    key: C::Key,
    value: C::Value,
) -> ContainmentResult<C> {
    let excluded = Entry::new(key, value);
    observe(ops::DOES_NOT_CONTAIN_ENTRY, || {
        does_not_contain_impl(actual, Some(slice::from_ref(&excluded)))
    })
}

fn does_not_contain_impl<C: AssociativeContainer>(
    actual: Option<&C>,
    entries: Option<&EntriesOf<C>>,
) -> ContainmentResult<C> {
    let Some((actual, entries)) = precheck(
        actual,
        entries,
        ExpectationShape::Entries,
        Polarity::Absence,
    )?
    else {
        return Ok(());
    };

    let found = diff::present(entries, |e| actual.contains_entry(&e.key, &e.value));
    if found.is_empty() {
        return Ok(());
    }
    Err(ContainmentError::ShouldNotContain {
        actual: actual.to_entries(),
        expected: entries.to_vec(),
        diff: DiffResult::found(found),
    })
}

/// Succeeds if `actual` holds exactly the given entries, in any order, and
/// nothing else. Repeated keys in `entries` overwrite for single-valued
/// containers and accumulate for multimaps.
///
/// Only unexpected entries in `actual` fail the check. The missing side is
/// computed after that, and only to enrich the failure.
///
/// # Errors
/// - Precondition failures
/// - `ShouldContainOnly` carrying `not_expected` and `not_found`
pub fn contains_only<C: AssociativeContainer>(
    actual: Option<&C>,
    entries: Option<&EntriesOf<C>>,
) -> ContainmentResult<C> {
    observe(ops::CONTAINS_ONLY, || contains_only_impl(actual, entries))
}

fn contains_only_impl<C: AssociativeContainer>(
    actual: Option<&C>,
    entries: Option<&EntriesOf<C>>,
) -> ContainmentResult<C> {
    let Some((actual, entries)) = precheck(
        actual,
        entries,
        ExpectationShape::Entries,
        Polarity::Presence,
    )?
    else {
        return Ok(());
    };

    let expected = expected_container::<C>(entries);
    let not_expected = actual.filter(|k, v| !expected.contains_entry(k, v));
    if not_expected.is_empty() {
        return Ok(());
    }
    let not_found = expected.filter(|k, v| !actual.contains_entry(k, v));
    Err(ContainmentError::ShouldContainOnly {
        actual: actual.to_entries(),
        expected: entries.to_vec(),
        diff: DiffResult::two_sided(not_found, not_expected),
    })
}

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

/// [`contains_keys`] for a single key.
///
/// # Errors
/// As [`contains_keys`].
pub fn contains_key<C: AssociativeContainer>(actual: Option<&C>, key: &C::Key) -> ContainmentResult<C> {
    observe(ops::CONTAINS_KEYS, || {
        contains_keys_impl(actual, Some(slice::from_ref(key)))
    })
}

/// Succeeds if every one of `keys` is a key of `actual`.
///
/// # Errors
/// - Precondition failures
/// - `ShouldContainKeys` carrying the keys that were not found
pub fn contains_keys<C: AssociativeContainer>(
    actual: Option<&C>,
    keys: Option<&[C::Key]>,
) -> ContainmentResult<C> {
    observe(ops::CONTAINS_KEYS, || contains_keys_impl(actual, keys))
}

fn contains_keys_impl<C: AssociativeContainer>(
    actual: Option<&C>,
    keys: Option<&[C::Key]>,
) -> ContainmentResult<C> {
    let Some((actual, keys)) = precheck(actual, keys, ExpectationShape::Keys, Polarity::Presence)?
    else {
        return Ok(());
    };

    let not_found = diff::absent(keys, |k| actual.contains_key(k));
    if not_found.is_empty() {
        return Ok(());
    }
    Err(ContainmentError::ShouldContainKeys {
        actual: actual.to_entries(),
        expected: keys.to_vec(),
        diff: DiffResult::not_found(not_found),
    })
}

/// [`does_not_contain_keys`] for a single key.
///
/// # Errors
/// As [`does_not_contain_keys`].
pub fn does_not_contain_key<C: AssociativeContainer>(
    actual: Option<&C>,
    key: &C::Key,
) -> ContainmentResult<C> {
    observe(ops::DOES_NOT_CONTAIN_KEYS, || {
        does_not_contain_keys_impl(actual, Some(slice::from_ref(key)))
    })
}

/// Succeeds if none of `keys` is a key of `actual`.
///
/// # Errors
/// - Precondition failures
/// - `ShouldNotContainKeys` carrying the keys that were found
pub fn does_not_contain_keys<C: AssociativeContainer>(
    actual: Option<&C>,
    keys: Option<&[C::Key]>,
) -> ContainmentResult<C> {
    observe(ops::DOES_NOT_CONTAIN_KEYS, || {
        does_not_contain_keys_impl(actual, keys)
    })
}

fn does_not_contain_keys_impl<C: AssociativeContainer>(
    actual: Option<&C>,
    keys: Option<&[C::Key]>,
) -> ContainmentResult<C> {
    let Some((actual, keys)) = precheck(actual, keys, ExpectationShape::Keys, Polarity::Absence)?
    else {
        return Ok(());
    };

    let found = diff::present(keys, |k| actual.contains_key(k));
    if found.is_empty() {
        return Ok(());
    }
    Err(ContainmentError::ShouldNotContainKeys {
        actual: actual.to_entries(),
        expected: keys.to_vec(),
        diff: DiffResult::found(found),
    })
}

/// Succeeds if `actual` has no key outside `keys`.
///
/// Failure is decided by the keys of `actual` that were not expected. Expected
/// keys missing from `actual` are reported alongside, but on their own they do
/// not fail the check.
///
/// # Errors
/// - Precondition failures
/// - `ShouldContainOnlyKeys` carrying `not_expected` and `not_found`
pub fn contains_only_keys<C: AssociativeContainer>(
    actual: Option<&C>,
    keys: Option<&[C::Key]>,
) -> ContainmentResult<C> {
    observe(ops::CONTAINS_ONLY_KEYS, || contains_only_keys_impl(actual, keys))
}

fn contains_only_keys_impl<C: AssociativeContainer>(
    actual: Option<&C>,
    keys: Option<&[C::Key]>,
) -> ContainmentResult<C> {
    let Some((actual, keys)) = precheck(actual, keys, ExpectationShape::Keys, Polarity::Presence)?
    else {
        return Ok(());
    };

    let expected: HashSet<&C::Key> = keys.iter().collect();
    let not_expected: Vec<C::Key> = actual
        .keys()
        .filter(|k| !expected.contains(k))
        .cloned()
        .collect();
    if not_expected.is_empty() {
        return Ok(());
    }
    let not_found = diff::absent(keys, |k| actual.contains_key(k));
    Err(ContainmentError::ShouldContainOnlyKeys {
        actual: actual.to_entries(),
        expected: keys.to_vec(),
        diff: DiffResult::two_sided(not_found, not_expected),
    })
}

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

/// [`contains_values`] for a single value.
///
/// # Errors
/// As [`contains_values`].
pub fn contains_value<C: AssociativeContainer>(
    actual: Option<&C>,
    value: &C::Value,
) -> ContainmentResult<C> {
    observe(ops::CONTAINS_VALUES, || {
        contains_values_impl(actual, Some(slice::from_ref(value)))
    })
}

/// Succeeds if every one of `values` is associated with some key of `actual`.
///
/// # Errors
/// - Precondition failures
/// - `ShouldContainValues` carrying the values that were not found
pub fn contains_values<C: AssociativeContainer>(
    actual: Option<&C>,
    values: Option<&[C::Value]>,
) -> ContainmentResult<C> {
    observe(ops::CONTAINS_VALUES, || contains_values_impl(actual, values))
}

fn contains_values_impl<C: AssociativeContainer>(
    actual: Option<&C>,
    values: Option<&[C::Value]>,
) -> ContainmentResult<C> {
    let Some((actual, values)) = precheck(
        actual,
        values,
        ExpectationShape::Values,
        Polarity::Presence,
    )?
    else {
        return Ok(());
    };

    let not_found = diff::absent(values, |v| actual.contains_value(v));
    if not_found.is_empty() {
        return Ok(());
    }
    Err(ContainmentError::ShouldContainValues {
        actual: actual.to_entries(),
        expected: values.to_vec(),
        diff: DiffResult::not_found(not_found),
    })
}

/// [`does_not_contain_values`] for a single value.
///
/// # Errors
/// As [`does_not_contain_values`].
pub fn does_not_contain_value<C: AssociativeContainer>(
    actual: Option<&C>,
    value: &C::Value,
) -> ContainmentResult<C> {
    observe(ops::DOES_NOT_CONTAIN_VALUES, || {
        does_not_contain_values_impl(actual, Some(slice::from_ref(value)))
    })
}

/// Succeeds if none of `values` is associated with any key of `actual`.
///
/// # Errors
/// - Precondition failures
/// - `ShouldNotContainValues` carrying the values that were found
pub fn does_not_contain_values<C: AssociativeContainer>(
    actual: Option<&C>,
    values: Option<&[C::Value]>,
) -> ContainmentResult<C> {
    observe(ops::DOES_NOT_CONTAIN_VALUES, || {
        does_not_contain_values_impl(actual, values)
    })
}

fn does_not_contain_values_impl<C: AssociativeContainer>(
    actual: Option<&C>,
    values: Option<&[C::Value]>,
) -> ContainmentResult<C> {
    let Some((actual, values)) = precheck(
        actual,
        values,
        ExpectationShape::Values,
        Polarity::Absence,
    )?
    else {
        return Ok(());
    };

    let found = diff::present(values, |v| actual.contains_value(v));
    if found.is_empty() {
        return Ok(());
    }
    Err(ContainmentError::ShouldNotContainValues {
        actual: actual.to_entries(),
        expected: values.to_vec(),
        diff: DiffResult::found(found),
    })
}

// ---------------------------------------------------------------------------
// Conditions
// ---------------------------------------------------------------------------

/// Succeeds if `key` is present and at least one of its values satisfies
/// `condition`.
///
/// The two stages fail with distinct errors so callers can tell a wrong key
/// from a right key with the wrong value.
///
/// # Errors
/// - `ActualIsNull`
/// - `KeyAbsent` when `key` is not a key of `actual`
/// - `ConditionNotSatisfied` carrying every value of `key`
pub fn has_entry_satisfying<C: AssociativeContainer>(
    actual: Option<&C>,
    key: &C::Key,
    condition: &Condition<'_, C::Value>,
) -> ContainmentResult<C> {
    observe(ops::HAS_ENTRY_SATISFYING, || {
        has_entry_satisfying_impl(actual, key, condition)
    })
}

/// [`has_entry_satisfying`] with an inline predicate.
///
/// # Errors
/// As [`has_entry_satisfying`].
pub fn has_entry_satisfying_fn<C, P>(
    actual: Option<&C>,
    key: &C::Key,
    description: &str,
    predicate: P,
) -> ContainmentResult<C>
where
    C: AssociativeContainer,
    P: Fn(&C::Value) -> bool,
{
    let condition = Condition::new(description, predicate);
    has_entry_satisfying(actual, key, &condition)
}

fn has_entry_satisfying_impl<C: AssociativeContainer>(
    actual: Option<&C>,
    key: &C::Key,
    condition: &Condition<'_, C::Value>,
) -> ContainmentResult<C> {
    let actual = validate_not_null(actual)?;
    if !actual.contains_key(key) {
        return Err(ContainmentError::KeyAbsent {
            actual: actual.to_entries(),
            key: key.clone(),
        });
    }

    let values = actual.get_all(key);
    if values.iter().copied().any(|v| condition.matches(v)) {
        return Ok(());
    }
    Err(ContainmentError::ConditionNotSatisfied {
        key: key.clone(),
        values: values.into_iter().cloned().collect(),
        condition: condition.description().to_string(),
    })
}
