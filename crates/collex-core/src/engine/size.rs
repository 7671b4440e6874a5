//! Size checks. Sizes are flattened entry counts.

use super::validation::validate_not_null;
use super::{observe, ContainmentResult};
use crate::container::AssociativeContainer;
use crate::errors::{ContainmentError, ExpectationShape, PreconditionError};
use collex_core_types::ops;

/// # Errors
/// `ActualIsNull`, or `ShouldBeEmpty` carrying the entries.
pub fn is_empty<C: AssociativeContainer>(actual: Option<&C>) -> ContainmentResult<C> {
    observe(ops::IS_EMPTY, || -> ContainmentResult<C> {
        let actual = validate_not_null(actual)?;
        if actual.is_empty() {
            return Ok(());
        }
        Err(ContainmentError::ShouldBeEmpty {
            actual: actual.to_entries(),
        })
    })
}

/// # Errors
/// `ActualIsNull`, or `ShouldNotBeEmpty`.
pub fn is_not_empty<C: AssociativeContainer>(actual: Option<&C>) -> ContainmentResult<C> {
    observe(ops::IS_NOT_EMPTY, || -> ContainmentResult<C> {
        let actual = validate_not_null(actual)?;
        if actual.is_empty() {
            return Err(ContainmentError::ShouldNotBeEmpty);
        }
        Ok(())
    })
}

/// Succeeds if `actual` holds exactly `expected_size` entries.
///
/// # Errors
/// `ActualIsNull`, or `ShouldHaveSize`.
pub fn has_size<C: AssociativeContainer>(actual: Option<&C>, expected_size: usize) -> ContainmentResult<C> {
    observe(ops::HAS_SIZE, || -> ContainmentResult<C> {
        let actual = validate_not_null(actual)?;
        if actual.len() == expected_size {
            return Ok(());
        }
        Err(ContainmentError::ShouldHaveSize {
            actual_size: actual.len(),
            expected_size,
            actual: actual.to_entries(),
        })
    })
}

/// Succeeds if `actual` and `other` hold the same number of entries. The two
/// containers may be of different kinds, e.g. a map against a multimap.
///
/// # Errors
/// - `ActualIsNull`
/// - `NullExpectation` when `other` is `None`
/// - `ShouldHaveSameSizeAs` carrying both snapshots
pub fn has_same_size_as<C, O>(actual: Option<&C>, other: Option<&O>) -> ContainmentResult<C>
where
    C: AssociativeContainer,
    O: AssociativeContainer<Key = C::Key, Value = C::Value>,
{
    observe(ops::HAS_SAME_SIZE_AS, || -> ContainmentResult<C> {
        let actual = validate_not_null(actual)?;
        let other = other.ok_or(PreconditionError::NullExpectation {
            shape: ExpectationShape::Container,
        })?;
        if actual.len() == other.len() {
            return Ok(());
        }
        Err(ContainmentError::ShouldHaveSameSizeAs {
            actual_size: actual.len(),
            expected_size: other.len(),
            actual: actual.to_entries(),
            expected: other.to_entries(),
        })
    })
}
