//! Single-valued container impls for the standard map types.

use super::{AssociativeContainer, IterationOrder, ValueArity};
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

impl<K, V, S> AssociativeContainer for HashMap<K, V, S>
where
    K: Eq + Hash + Clone + Debug,
    V: PartialEq + Clone + Debug,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    const ARITY: ValueArity = ValueArity::Single;

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn iteration_order(&self) -> IterationOrder {
        IterationOrder::Unspecified
    }

    fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        HashMap::keys(self)
    }

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.iter()
    }

    fn get_all(&self, key: &K) -> Vec<&V> {
        self.get(key).into_iter().collect()
    }

    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }

    fn contains_entry(&self, key: &K, value: &V) -> bool {
        self.get(key) == Some(value)
    }
}

impl<K, V> AssociativeContainer for BTreeMap<K, V>
where
    K: Ord + Eq + Hash + Clone + Debug,
    V: PartialEq + Clone + Debug,
{
    type Key = K;
    type Value = V;

    const ARITY: ValueArity = ValueArity::Single;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn iteration_order(&self) -> IterationOrder {
        IterationOrder::Sorted
    }

    fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        BTreeMap::keys(self)
    }

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.iter()
    }

    fn get_all(&self, key: &K) -> Vec<&V> {
        self.get(key).into_iter().collect()
    }

    fn contains_key(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }

    fn contains_entry(&self, key: &K, value: &V) -> bool {
        self.get(key) == Some(value)
    }
}

impl<K, V, S> AssociativeContainer for IndexMap<K, V, S>
where
    K: Eq + Hash + Clone + Debug,
    V: PartialEq + Clone + Debug,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    const ARITY: ValueArity = ValueArity::Single;

    fn len(&self) -> usize {
        IndexMap::len(self)
    }

    fn iteration_order(&self) -> IterationOrder {
        IterationOrder::Insertion
    }

    fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        IndexMap::keys(self)
    }

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.iter()
    }

    fn get_all(&self, key: &K) -> Vec<&V> {
        self.get(key).into_iter().collect()
    }

    fn contains_key(&self, key: &K) -> bool {
        IndexMap::contains_key(self, key)
    }

    fn contains_entry(&self, key: &K, value: &V) -> bool {
        self.get(key) == Some(value)
    }
}
