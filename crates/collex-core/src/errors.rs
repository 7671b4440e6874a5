use crate::container::Entry;
use crate::diff::{DiffResult, IndexMismatch};
use std::fmt;
use std::fmt::Debug;
use thiserror::Error;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure raised by the engine maps to exactly one kind. Kinds carry a
/// stable code usable for programmatic handling and for the `err.code` field of
/// boundary log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Preconditions
    /// The container under test is absent
    ActualIsNull,
    /// The expectation itself is null or empty where it must not be (caller misuse)
    InvalidExpectation,

    // Assertion failures
    /// Cardinalities differ
    SizeMismatch,
    /// Containment or diff failure; carries the computed sets
    ContentMismatch,
    /// Same content, different order; carries the first differing index
    OrderMismatch,
    /// `has_entry_satisfying` could not find the key
    KeyAbsent,
    /// `has_entry_satisfying` found the key but no value satisfied the condition
    ConditionNotSatisfied,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::ActualIsNull => "ERR_ACTUAL_IS_NULL",
            ExErrorKind::InvalidExpectation => "ERR_INVALID_EXPECTATION",
            ExErrorKind::SizeMismatch => "ERR_SIZE_MISMATCH",
            ExErrorKind::ContentMismatch => "ERR_CONTENT_MISMATCH",
            ExErrorKind::OrderMismatch => "ERR_ORDER_MISMATCH",
            ExErrorKind::KeyAbsent => "ERR_KEY_ABSENT",
            ExErrorKind::ConditionNotSatisfied => "ERR_CONDITION_NOT_SATISFIED",
        }
    }

    /// Whether this kind signals caller misuse rather than a failed assertion
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            ExErrorKind::ActualIsNull | ExErrorKind::InvalidExpectation
        )
    }
}

/// Canonical structured error type
///
/// Type-erased view of any engine failure, used at reporting boundaries where
/// the generic payload is not needed.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ExError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// What an expectation argument holds; used in precondition messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectationShape {
    Entries,
    Keys,
    Values,
    Elements,
    Container,
}

impl fmt::Display for ExpectationShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExpectationShape::Entries => "entries",
            ExpectationShape::Keys => "keys",
            ExpectationShape::Values => "values",
            ExpectationShape::Elements => "elements",
            ExpectationShape::Container => "container",
        };
        f.write_str(name)
    }
}

/// Input validation failures, raised before any comparison runs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreconditionError {
    #[error("Expecting actual not to be null")]
    ActualIsNull,

    #[error("The {shape} to look for should not be null")]
    NullExpectation { shape: ExpectationShape },

    #[error("The {shape} to look for should not be empty")]
    EmptyExpectation { shape: ExpectationShape },

    /// Positive containment against an empty actual can never hold
    #[error("Expecting actual not to be empty when looking for {expected_len} {shape}")]
    ActualIsEmpty {
        shape: ExpectationShape,
        expected_len: usize,
    },

    #[error("The entry at index {index} should not be null")]
    NullEntry { index: usize },
}

impl PreconditionError {
    pub fn kind(&self) -> ExErrorKind {
        match self {
            PreconditionError::ActualIsNull => ExErrorKind::ActualIsNull,
            _ => ExErrorKind::InvalidExpectation,
        }
    }
}

/// Failure of a containment operation over an associative container.
///
/// `actual` is always a snapshot of the container's flattened entries in its
/// iteration order; `expected` is the expectation as supplied.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContainmentError<K: Debug, V: Debug> {
    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error("Expecting {actual:?} to contain at least one of {expected:?}")]
    ShouldContainAnyOf {
        actual: Vec<Entry<K, V>>,
        expected: Vec<Entry<K, V>>,
    },

    #[error("Expecting {actual:?} to contain {expected:?} but could not find {:?}", .diff.not_found)]
    ShouldContain {
        actual: Vec<Entry<K, V>>,
        expected: Vec<Entry<K, V>>,
        diff: DiffResult<Entry<K, V>>,
    },

    #[error("Expecting {actual:?} not to contain {expected:?} but found {:?}", .diff.found)]
    ShouldNotContain {
        actual: Vec<Entry<K, V>>,
        expected: Vec<Entry<K, V>>,
        diff: DiffResult<Entry<K, V>>,
    },

    #[error("Expecting {actual:?} to contain keys {expected:?} but could not find {:?}", .diff.not_found)]
    ShouldContainKeys {
        actual: Vec<Entry<K, V>>,
        expected: Vec<K>,
        diff: DiffResult<K>,
    },

    #[error("Expecting {actual:?} not to contain keys {expected:?} but found {:?}", .diff.found)]
    ShouldNotContainKeys {
        actual: Vec<Entry<K, V>>,
        expected: Vec<K>,
        diff: DiffResult<K>,
    },

    #[error(
        "Expecting {actual:?} to contain only keys {expected:?} but found unexpected {:?} (not found: {:?})",
        .diff.not_expected,
        .diff.not_found
    )]
    ShouldContainOnlyKeys {
        actual: Vec<Entry<K, V>>,
        expected: Vec<K>,
        diff: DiffResult<K>,
    },

    #[error("Expecting {actual:?} to contain values {expected:?} but could not find {:?}", .diff.not_found)]
    ShouldContainValues {
        actual: Vec<Entry<K, V>>,
        expected: Vec<V>,
        diff: DiffResult<V>,
    },

    #[error("Expecting {actual:?} not to contain values {expected:?} but found {:?}", .diff.found)]
    ShouldNotContainValues {
        actual: Vec<Entry<K, V>>,
        expected: Vec<V>,
        diff: DiffResult<V>,
    },

    #[error(
        "Expecting {actual:?} to contain only {expected:?} but found unexpected {:?} (not found: {:?})",
        .diff.not_expected,
        .diff.not_found
    )]
    ShouldContainOnly {
        actual: Vec<Entry<K, V>>,
        expected: Vec<Entry<K, V>>,
        diff: DiffResult<Entry<K, V>>,
    },

    #[error(
        "Expecting {actual:?} to contain exactly {expected:?} but could not find {:?} and found unexpected {:?}",
        .diff.not_found,
        .diff.not_expected
    )]
    ShouldContainExactly {
        actual: Vec<Entry<K, V>>,
        expected: Vec<Entry<K, V>>,
        diff: DiffResult<Entry<K, V>>,
    },

    #[error(
        "Actual and expected have the same entries but not in the same order, at index {} actual entry was {:?} whereas expected entry was {:?}",
        .0.index,
        .0.actual,
        .0.expected
    )]
    ElementsDifferAtIndex(IndexMismatch<Entry<K, V>>),

    #[error("Expected size {expected_size} but was {actual_size} in {actual:?} (expected {expected:?})")]
    ShouldHaveSameSizeAs {
        actual_size: usize,
        expected_size: usize,
        actual: Vec<Entry<K, V>>,
        expected: Vec<Entry<K, V>>,
    },

    #[error("Expected size {expected_size} but was {actual_size} in {actual:?}")]
    ShouldHaveSize {
        actual_size: usize,
        expected_size: usize,
        actual: Vec<Entry<K, V>>,
    },

    #[error("Expecting empty but was {actual:?}")]
    ShouldBeEmpty { actual: Vec<Entry<K, V>> },

    #[error("Expecting actual not to be empty")]
    ShouldNotBeEmpty,

    #[error("Expecting {actual:?} to contain key {key:?}")]
    KeyAbsent { actual: Vec<Entry<K, V>>, key: K },

    #[error("Expecting values {values:?} of key {key:?} to have at least one element {condition}")]
    ConditionNotSatisfied {
        key: K,
        values: Vec<V>,
        condition: String,
    },
}

impl<K: Debug, V: Debug> ContainmentError<K, V> {
    /// Stable kind of this failure
    pub fn kind(&self) -> ExErrorKind {
        match self {
            ContainmentError::Precondition(e) => e.kind(),
            ContainmentError::ShouldHaveSameSizeAs { .. }
            | ContainmentError::ShouldHaveSize { .. } => ExErrorKind::SizeMismatch,
            ContainmentError::ElementsDifferAtIndex(_) => ExErrorKind::OrderMismatch,
            ContainmentError::KeyAbsent { .. } => ExErrorKind::KeyAbsent,
            ContainmentError::ConditionNotSatisfied { .. } => ExErrorKind::ConditionNotSatisfied,
            _ => ExErrorKind::ContentMismatch,
        }
    }
}

/// Failure of an exact-match operation over a plain sequence
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SequenceError<T: Debug> {
    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error("Expected size {expected_size} but was {actual_size} in {actual:?} (expected {expected:?})")]
    ShouldHaveSameSizeAs {
        actual_size: usize,
        expected_size: usize,
        actual: Vec<T>,
        expected: Vec<T>,
    },

    #[error(
        "Expecting {actual:?} to contain exactly in any order {expected:?} but could not find {:?} and found unexpected {:?}",
        .diff.not_found,
        .diff.not_expected
    )]
    ShouldContainExactlyInAnyOrder {
        actual: Vec<T>,
        expected: Vec<T>,
        diff: DiffResult<T>,
    },

    #[error(
        "Expecting {actual:?} to contain exactly {expected:?} but could not find {:?} and found unexpected {:?}",
        .diff.not_found,
        .diff.not_expected
    )]
    ShouldContainExactly {
        actual: Vec<T>,
        expected: Vec<T>,
        diff: DiffResult<T>,
    },

    #[error(
        "Actual and expected have the same elements but not in the same order, at index {} actual element was {:?} whereas expected element was {:?}",
        .0.index,
        .0.actual,
        .0.expected
    )]
    ElementsDifferAtIndex(IndexMismatch<T>),
}

impl<T: Debug> SequenceError<T> {
    /// Stable kind of this failure
    pub fn kind(&self) -> ExErrorKind {
        match self {
            SequenceError::Precondition(e) => e.kind(),
            SequenceError::ShouldHaveSameSizeAs { .. } => ExErrorKind::SizeMismatch,
            SequenceError::ElementsDifferAtIndex(_) => ExErrorKind::OrderMismatch,
            _ => ExErrorKind::ContentMismatch,
        }
    }
}

impl From<&PreconditionError> for ExError {
    fn from(err: &PreconditionError) -> Self {
        ExError::new(err.kind()).with_message(err.to_string())
    }
}

impl<K: Debug, V: Debug> ContainmentError<K, V> {
    /// Boundary view of this failure, tagged with the operation that raised it
    pub fn to_ex_error(&self, op: &str) -> ExError {
        ExError::from(self).with_op(op)
    }
}

impl<T: Debug> SequenceError<T> {
    /// Boundary view of this failure, tagged with the operation that raised it
    pub fn to_ex_error(&self, op: &str) -> ExError {
        ExError::from(self).with_op(op)
    }
}

impl<K: Debug, V: Debug> From<&ContainmentError<K, V>> for ExError {
    fn from(err: &ContainmentError<K, V>) -> Self {
        ExError::new(err.kind()).with_message(err.to_string())
    }
}

impl<K: Debug, V: Debug> From<ContainmentError<K, V>> for ExError {
    fn from(err: ContainmentError<K, V>) -> Self {
        ExError::from(&err)
    }
}

impl<T: Debug> From<&SequenceError<T>> for ExError {
    fn from(err: &SequenceError<T>) -> Self {
        ExError::new(err.kind()).with_message(err.to_string())
    }
}

impl<T: Debug> From<SequenceError<T>> for ExError {
    fn from(err: SequenceError<T>) -> Self {
        ExError::from(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::entry;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::ActualIsNull, "ERR_ACTUAL_IS_NULL"),
            (ExErrorKind::InvalidExpectation, "ERR_INVALID_EXPECTATION"),
            (ExErrorKind::SizeMismatch, "ERR_SIZE_MISMATCH"),
            (ExErrorKind::ContentMismatch, "ERR_CONTENT_MISMATCH"),
            (ExErrorKind::OrderMismatch, "ERR_ORDER_MISMATCH"),
            (ExErrorKind::KeyAbsent, "ERR_KEY_ABSENT"),
            (
                ExErrorKind::ConditionNotSatisfied,
                "ERR_CONDITION_NOT_SATISFIED",
            ),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_precondition_kinds() {
        assert_eq!(
            PreconditionError::ActualIsNull.kind(),
            ExErrorKind::ActualIsNull
        );
        assert_eq!(
            PreconditionError::NullEntry { index: 2 }.kind(),
            ExErrorKind::InvalidExpectation
        );
        assert!(ExErrorKind::InvalidExpectation.is_precondition());
        assert!(!ExErrorKind::ContentMismatch.is_precondition());
    }

    #[test]
    fn test_containment_error_converts_to_ex_error() {
        let err: ContainmentError<&str, i32> = ContainmentError::KeyAbsent {
            actual: vec![entry("a", 1)],
            key: "b",
        };
        let ex: ExError = err.into();
        assert_eq!(ex.kind(), ExErrorKind::KeyAbsent);
        assert!(ex.message().contains("\"b\""));
        assert_eq!(
            ex.with_op("has_entry_satisfying").to_string(),
            "[ERR_KEY_ABSENT] in operation 'has_entry_satisfying': Expecting [Entry { key: \"a\", value: 1 }] to contain key \"b\""
        );
    }

    #[test]
    fn test_precondition_wraps_transparently() {
        let err: ContainmentError<&str, i32> = PreconditionError::EmptyExpectation {
            shape: ExpectationShape::Keys,
        }
        .into();
        assert_eq!(err.kind(), ExErrorKind::InvalidExpectation);
        assert_eq!(err.to_string(), "The keys to look for should not be empty");
    }
}
