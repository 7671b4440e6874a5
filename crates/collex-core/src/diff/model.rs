//! Diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Collections are `Vec`s in the order the engine discovered them, which is
//! the iteration order of the side being walked.

use serde::{Deserialize, Serialize};

/// The supporting sets of a failed containment check.
///
/// Which sets are populated depends on the operation: `contains*` fills
/// `not_found`, `does_not_contain*` fills `found`, and the two-sided checks
/// (`contains_only*`, `contains_exactly*`) fill `not_expected` and
/// `not_found`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult<T> {
    /// Expected but absent from actual
    pub not_found: Vec<T>,
    /// Present in actual but not expected
    pub not_expected: Vec<T>,
    /// Expected to be absent but present in actual
    pub found: Vec<T>,
}

impl<T> DiffResult<T> {
    pub fn not_found(not_found: Vec<T>) -> Self {
        Self {
            not_found,
            ..Self::default()
        }
    }

    pub fn found(found: Vec<T>) -> Self {
        Self {
            found,
            ..Self::default()
        }
    }

    pub fn two_sided(not_found: Vec<T>, not_expected: Vec<T>) -> Self {
        Self {
            not_found,
            not_expected,
            found: Vec::new(),
        }
    }

    /// True if every set is empty
    pub fn is_clean(&self) -> bool {
        self.not_found.is_empty() && self.not_expected.is_empty() && self.found.is_empty()
    }
}

impl<T> Default for DiffResult<T> {
    fn default() -> Self {
        Self {
            not_found: Vec::new(),
            not_expected: Vec::new(),
            found: Vec::new(),
        }
    }
}

/// First position at which two same-content sequences diverge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexMismatch<T> {
    pub index: usize,
    /// Element of actual at `index`
    pub actual: T,
    /// Element of the expectation at `index`
    pub expected: T,
}
