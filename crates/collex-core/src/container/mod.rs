//! Associative container abstraction consumed by the containment engine.
//!
//! The engine is written once against [`AssociativeContainer`]. Single-valued
//! maps (`HashMap`, `BTreeMap`, `IndexMap`) and the multi-valued [`Multimap`]
//! all implement it; the two shapes differ only in their [`ValueArity`] and in
//! how many values a key may carry.
//!
//! Absent ("null") keys and values are modelled by the element types
//! themselves, e.g. `HashMap<Option<&str>, i32>`. To the engine they are
//! ordinary values and are checked like any other.

pub mod entry;
pub mod map;
pub mod multimap;

pub use entry::{entry, Entry};
pub use multimap::Multimap;

use std::fmt::Debug;
use std::hash::Hash;

/// How many values a single key may be associated with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueArity {
    /// Each key maps to exactly one value (Map)
    Single,
    /// Each key maps to a non-empty sequence of values (Multimap)
    Multi,
}

/// Iteration order guaranteed by a container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationOrder {
    /// Entries are yielded in the order they were inserted
    Insertion,
    /// Entries are yielded in ascending key order
    Sorted,
    /// No order is guaranteed (hash order)
    Unspecified,
}

impl IterationOrder {
    /// Whether positional comparisons against this container are meaningful
    pub fn is_significant(self) -> bool {
        !matches!(self, IterationOrder::Unspecified)
    }
}

/// Read-only capability set the engine needs from an actual container.
///
/// `len` counts flattened entries: for a multimap, a key with three values
/// contributes three to the length.
pub trait AssociativeContainer {
    type Key: Eq + Hash + Clone + Debug;
    type Value: PartialEq + Clone + Debug;

    /// Single- or multi-valued
    const ARITY: ValueArity;

    /// Number of (flattened) entries
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iteration order guaranteed by this container instance
    fn iteration_order(&self) -> IterationOrder;

    /// Distinct keys, in iteration order
    fn keys(&self) -> impl Iterator<Item = &Self::Key> + '_;

    /// Flattened entries, in iteration order
    fn entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)> + '_;

    /// All values associated with `key`; empty when the key is absent
    fn get_all(&self, key: &Self::Key) -> Vec<&Self::Value>;

    fn contains_key(&self, key: &Self::Key) -> bool;

    /// Whether `key` is present and associated with `value`
    fn contains_entry(&self, key: &Self::Key, value: &Self::Value) -> bool;

    /// Flattened values across all keys
    fn values(&self) -> impl Iterator<Item = &Self::Value> + '_ {
        self.entries().map(|(_, v)| v)
    }

    fn contains_value(&self, value: &Self::Value) -> bool {
        self.values().any(|v| v == value)
    }

    /// Owned copies of the entries accepted by `predicate`, in iteration order
    fn filter<P>(&self, mut predicate: P) -> Vec<Entry<Self::Key, Self::Value>>
    where
        P: FnMut(&Self::Key, &Self::Value) -> bool,
    {
        self.entries()
            .filter(|(k, v)| predicate(k, v))
            .map(|(k, v)| Entry::new(k.clone(), v.clone()))
            .collect()
    }

    /// Owned snapshot of every entry, in iteration order
    fn to_entries(&self) -> Vec<Entry<Self::Key, Self::Value>> {
        self.filter(|_, _| true)
    }
}
