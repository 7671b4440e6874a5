use collex_core::{entry, Entry, Multimap};
use indexmap::IndexMap;
use std::collections::HashMap;

pub type Pair = Entry<&'static str, &'static str>;

/// Insertion-ordered map `{name: Yoda, color: green}`
#[allow(dead_code)]
pub fn yoda() -> IndexMap<&'static str, &'static str> {
    IndexMap::from([("name", "Yoda"), ("color", "green")])
}

/// Hash map `{key1: value1, key2: value2}`
#[allow(dead_code)]
pub fn two_keys() -> HashMap<&'static str, &'static str> {
    HashMap::from([("key1", "value1"), ("key2", "value2")])
}

/// Linked multimap of basketball players by team
///
/// Key order: Lakers, Bulls, Spurs. Each key carries several players.
#[allow(dead_code)]
pub fn teams() -> Multimap<&'static str, &'static str> {
    Multimap::linked_of([
        ("Lakers", "Kobe Bryant"),
        ("Lakers", "Magic Johnson"),
        ("Lakers", "Kareem Abdul Jabbar"),
        ("Bulls", "Michael Jordan"),
        ("Bulls", "Scottie Pippen"),
        ("Bulls", "Derrick Rose"),
        ("Spurs", "Tony Parker"),
        ("Spurs", "Tim Duncan"),
        ("Spurs", "Manu Ginobili"),
    ])
}

/// Build an entry array from pairs
#[allow(dead_code)]
pub fn entries(pairs: &[(&'static str, &'static str)]) -> Vec<Pair> {
    pairs.iter().map(|&(k, v)| entry(k, v)).collect()
}
