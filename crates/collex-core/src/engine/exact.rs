//! Exact-match check over associative containers.

use super::validation::{precheck, Polarity};
use super::{expected_container, observe, ContainmentResult, EntriesOf};
use crate::container::{AssociativeContainer, Entry, ValueArity};
use crate::diff::{self, DiffResult, IndexMismatch};
use crate::errors::{ContainmentError, ExpectationShape};
use collex_core_types::ops;

/// Succeeds if `actual` holds exactly `entries` and nothing else, and, when
/// the container's iteration order is meaningful, holds them in the order
/// given.
///
/// Checks run in a fixed order: sizes, then content (both directions), then
/// order. Multimap content is compared with multiplicity. The order check
/// compares keys only, and is skipped for containers with no guaranteed
/// iteration order.
///
/// # Errors
/// - Precondition failures
/// - `ShouldHaveSameSizeAs` when the flattened sizes differ
/// - `ShouldContainExactly` carrying `not_expected` and `not_found`
/// - `ElementsDifferAtIndex` at the first position whose keys differ
pub fn contains_exactly<C: AssociativeContainer>(
    actual: Option<&C>,
    entries: Option<&EntriesOf<C>>,
) -> ContainmentResult<C> {
    observe(ops::CONTAINS_EXACTLY, || contains_exactly_impl(actual, entries))
}

fn contains_exactly_impl<C: AssociativeContainer>(
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

    if actual.len() != entries.len() {
        return Err(ContainmentError::ShouldHaveSameSizeAs {
            actual_size: actual.len(),
            expected_size: entries.len(),
            actual: actual.to_entries(),
            expected: entries.to_vec(),
        });
    }

    let diff = match C::ARITY {
        ValueArity::Single => {
            let expected = expected_container::<C>(entries);
            DiffResult::two_sided(
                expected.filter(|k, v| !actual.contains_entry(k, v)),
                actual.filter(|k, v| !expected.contains_entry(k, v)),
            )
        }
        // Repeated pairs count
        ValueArity::Multi => diff::multiset(&actual.to_entries(), entries),
    };
    if !diff.is_clean() {
        return Err(ContainmentError::ShouldContainExactly {
            actual: actual.to_entries(),
            expected: entries.to_vec(),
            diff,
        });
    }

    let order = actual.iteration_order();
    if !order.is_significant() {
        tracing::debug!(?order, "skipping order check");
        return Ok(());
    }
    match first_key_mismatch(actual, entries) {
        Some(mismatch) => Err(ContainmentError::ElementsDifferAtIndex(mismatch)),
        None => Ok(()),
    }
}

/// Lockstep walk of actual's entries against `expected`, keys only.
fn first_key_mismatch<C: AssociativeContainer>(
    actual: &C,
    expected: &EntriesOf<C>,
) -> Option<IndexMismatch<Entry<C::Key, C::Value>>> {
    actual
        .entries()
        .zip(expected)
        .enumerate()
        .find(|(_, ((key, _), e))| *key != &e.key)
        .map(|(index, ((key, value), e))| IndexMismatch {
            index,
            actual: Entry::new(key.clone(), value.clone()),
            expected: e.clone(),
        })
}
