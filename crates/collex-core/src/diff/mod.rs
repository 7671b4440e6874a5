//! Structured diff payloads and the set-difference primitives that build them.
//!
//! Every helper here is a one-sided difference: it walks a single side and
//! keeps the elements the other side does not (or does) hold. Two-sided diffs
//! are assembled by the engine so that the second side can be computed lazily.

pub mod model;

pub use model::{DiffResult, IndexMismatch};

/// Elements of `candidates` for which `contains` is false, cloned in order.
pub(crate) fn absent<'a, T, I, P>(candidates: I, mut contains: P) -> Vec<T>
where
    T: Clone + 'a,
    I: IntoIterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
{
    candidates
        .into_iter()
        .filter(|c| !contains(*c))
        .cloned()
        .collect()
}

/// Elements of `candidates` for which `contains` is true, cloned in order.
pub(crate) fn present<'a, T, I, P>(candidates: I, mut contains: P) -> Vec<T>
where
    T: Clone + 'a,
    I: IntoIterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
{
    candidates
        .into_iter()
        .filter(|c| contains(*c))
        .cloned()
        .collect()
}

/// Multiset difference of two sequences compared by `PartialEq`.
///
/// Each expected element consumes at most one equal actual element, so
/// repeated elements must appear the same number of times on both sides.
pub(crate) fn multiset<T: PartialEq + Clone>(actual: &[T], expected: &[T]) -> DiffResult<T> {
    let mut unmatched: Vec<&T> = actual.iter().collect();
    let mut not_found = Vec::new();
    for e in expected {
        match unmatched.iter().position(|a| *a == e) {
            Some(pos) => {
                unmatched.remove(pos);
            }
            None => not_found.push(e.clone()),
        }
    }
    DiffResult {
        not_found,
        not_expected: unmatched.into_iter().cloned().collect(),
        found: Vec::new(),
    }
}
