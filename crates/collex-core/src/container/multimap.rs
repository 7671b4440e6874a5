//! Multi-valued associative container.

use super::{AssociativeContainer, Entry, IterationOrder, ValueArity};
use indexmap::IndexMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A mapping from each key to a non-empty sequence of values.
///
/// Values for a key keep their insertion order and may repeat. Whether the
/// *key* order is meaningful is a property of the instance: a [`linked`]
/// multimap guarantees insertion order, a [`hashed`] one guarantees nothing
/// and the exact-match order check is skipped for it.
///
/// [`linked`]: Multimap::linked
/// [`hashed`]: Multimap::hashed
#[derive(Debug, Clone)]
pub struct Multimap<K, V> {
    by_key: IndexMap<K, Vec<V>>,
    order: IterationOrder,
    len: usize,
}

impl<K: Eq + Hash, V> Multimap<K, V> {
    /// Empty multimap iterating in insertion order
    pub fn linked() -> Self {
        Self::with_order(IterationOrder::Insertion)
    }

    /// Empty multimap with no iteration order guarantee
    pub fn hashed() -> Self {
        Self::with_order(IterationOrder::Unspecified)
    }

    fn with_order(order: IterationOrder) -> Self {
        Self {
            by_key: IndexMap::new(),
            order,
            len: 0,
        }
    }

    /// Build a linked multimap from `(key, value)` pairs; repeated keys
    /// accumulate values
    pub fn linked_of<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        pairs
            .into_iter()
            .fold(Self::linked(), |m, (k, v)| m.with_entry(k, v))
    }

    /// Build a hashed multimap from `(key, value)` pairs
    pub fn hashed_of<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        pairs
            .into_iter()
            .fold(Self::hashed(), |m, (k, v)| m.with_entry(k, v))
    }

    /// Returns a multimap that additionally associates `value` with `key`
    pub fn with_entry(mut self, key: K, value: V) -> Self {
        self.push(key, value);
        self
    }

    /// Returns a multimap where `value` is the only value of `key`
    pub fn with_replaced(mut self, key: K, value: V) -> Self {
        self.replace(key, value);
        self
    }

    pub(crate) fn push(&mut self, key: K, value: V) {
        self.by_key.entry(key).or_default().push(value);
        self.len += 1;
    }

    pub(crate) fn replace(&mut self, key: K, value: V) {
        if let Some(previous) = self.by_key.insert(key, vec![value]) {
            self.len -= previous.len();
        }
        self.len += 1;
    }

    /// Values of `key`, if present
    pub fn get(&self, key: &K) -> Option<&[V]> {
        self.by_key.get(key).map(Vec::as_slice)
    }

    /// Number of distinct keys
    pub fn key_count(&self) -> usize {
        self.by_key.len()
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for Multimap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.len == other.len && self.by_key == other.by_key
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for Multimap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::linked_of(iter)
    }
}

impl<K: Eq + Hash, V> FromIterator<Entry<K, V>> for Multimap<K, V> {
    fn from_iter<I: IntoIterator<Item = Entry<K, V>>>(iter: I) -> Self {
        Self::linked_of(iter.into_iter().map(Entry::into_tuple))
    }
}

impl<K, V> AssociativeContainer for Multimap<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: PartialEq + Clone + Debug,
{
    type Key = K;
    type Value = V;

    const ARITY: ValueArity = ValueArity::Multi;

    fn len(&self) -> usize {
        self.len
    }

    fn iteration_order(&self) -> IterationOrder {
        self.order
    }

    fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.by_key.keys()
    }

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.by_key
            .iter()
            .flat_map(|(k, values)| values.iter().map(move |v| (k, v)))
    }

    fn get_all(&self, key: &K) -> Vec<&V> {
        self.by_key
            .get(key)
            .map(|values| values.iter().collect())
            .unwrap_or_default()
    }

    fn contains_key(&self, key: &K) -> bool {
        self.by_key.contains_key(key)
    }

    fn contains_entry(&self, key: &K, value: &V) -> bool {
        self.by_key
            .get(key)
            .is_some_and(|values| values.contains(value))
    }
}
