//! Containment engine.
//!
//! Pure functions over an actual [`AssociativeContainer`] and an expectation.
//! Each returns `Ok(())` when the predicate holds and otherwise a single
//! [`ContainmentError`] carrying the diff data a renderer needs.
//!
//! `None` for the actual container or for an expectation array stands for an
//! absent (null) argument and is rejected by [`validation`] before any
//! comparison runs.
//!
//! ## Logging Ownership
//!
//! Every public operation emits `start` on entry and exactly one of `end` /
//! `end_error` on exit. Helpers below that boundary use only
//! `tracing::debug!()`.

pub mod condition;
pub mod exact;
pub mod sequence;
pub mod size;
pub mod unordered;
pub mod validation;

pub use condition::Condition;
pub use exact::contains_exactly;
pub use sequence::{contains_exactly_in_any_order, contains_exactly_in_order};
pub use size::{has_same_size_as, has_size, is_empty, is_not_empty};
pub use unordered::{
    contains, contains_all_entries_of, contains_all_entries_of_container, contains_any_of,
    contains_entry, contains_key, contains_keys, contains_only, contains_only_keys,
    contains_value, contains_values, does_not_contain, does_not_contain_entry,
    does_not_contain_key, does_not_contain_keys, does_not_contain_value,
    does_not_contain_values, has_entry_satisfying, has_entry_satisfying_fn,
};

use crate::container::{AssociativeContainer, Multimap, ValueArity};
use crate::errors::{ContainmentError, ExError};
use crate::{log_op_end, log_op_error, log_op_start};
use std::time::Instant;

/// Outcome of an engine operation over container `C`
pub type ContainmentResult<C> = Result<
    (),
    ContainmentError<<C as AssociativeContainer>::Key, <C as AssociativeContainer>::Value>,
>;

/// Entry slice matching container `C`
pub type EntriesOf<C> =
    [crate::container::Entry<<C as AssociativeContainer>::Key, <C as AssociativeContainer>::Value>];

/// Run `body` inside the operation's logging boundary.
pub(crate) fn observe<E, F>(op: &'static str, body: F) -> Result<(), E>
where
    F: FnOnce() -> Result<(), E>,
    for<'e> ExError: From<&'e E>,
{
    log_op_start!(op);
    let start = Instant::now();

    let result = body();

    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(()) => {
            log_op_end!(op, duration_ms = elapsed);
        }
        Err(e) => {
            log_op_error!(op, e, duration_ms = elapsed);
        }
    }
    result
}

/// Build the lookup side of an expectation with the same value semantics as
/// `C`: repeated keys overwrite for single-valued containers and accumulate
/// for multi-valued ones. Input order is preserved.
pub(crate) fn expected_container<C: AssociativeContainer>(
    entries: &EntriesOf<C>,
) -> Multimap<C::Key, C::Value> {
    let mut expected = Multimap::linked();
    for e in entries {
        match C::ARITY {
            ValueArity::Single => expected.replace(e.key.clone(), e.value.clone()),
            ValueArity::Multi => expected.push(e.key.clone(), e.value.clone()),
        }
    }
    expected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::entry;
    use indexmap::IndexMap;

    #[test]
    fn test_expected_container_overwrites_for_maps() {
        let entries = [entry("a", 1), entry("b", 2), entry("a", 3)];
        let expected = expected_container::<IndexMap<&str, i32>>(&entries);
        assert_eq!(expected.to_entries(), vec![entry("a", 3), entry("b", 2)]);
    }

    #[test]
    fn test_expected_container_accumulates_for_multimaps() {
        let entries = [entry("a", 1), entry("b", 2), entry("a", 3)];
        let expected = expected_container::<Multimap<&str, i32>>(&entries);
        assert_eq!(expected.len(), 3);
        assert!(expected.contains_entry(&"a", &1));
        assert!(expected.contains_entry(&"a", &3));
    }
}
