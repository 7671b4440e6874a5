use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable key/value pair.
///
/// For multimaps this is a *flattened* entry: a key paired with one of its
/// values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Entry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }
}

/// Shorthand for [`Entry::new`]
///
/// ```
/// use collex_core::container::entry;
///
/// let e = entry("key1", "value1");
/// assert_eq!(e.key, "key1");
/// ```
pub fn entry<K, V>(key: K, value: V) -> Entry<K, V> {
    Entry::new(key, value)
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Display for Entry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}={:?}", self.key, self.value)
    }
}
