//! Described predicates for `has_entry_satisfying`.

use std::fmt;

/// A described predicate over values, used by `has_entry_satisfying`.
///
/// The description is carried into the failure so a renderer can say what
/// was required.
///
/// ```
/// use collex_core::engine::Condition;
///
/// let even = Condition::new("even", |v: &i32| v % 2 == 0);
/// assert!(even.matches(&4));
/// assert_eq!(even.description(), "even");
/// ```
pub struct Condition<'a, T> {
    description: String,
    predicate: Box<dyn Fn(&T) -> bool + 'a>,
}

impl<'a, T> Condition<'a, T> {
    pub fn new(description: impl Into<String>, predicate: impl Fn(&T) -> bool + 'a) -> Self {
        Self {
            description: description.into(),
            predicate: Box::new(predicate),
        }
    }

    pub fn matches(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl<T> fmt::Debug for Condition<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for Condition<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}
