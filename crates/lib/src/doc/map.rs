//! Insertion-ordered map used for document objects.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Value;

/// A string-keyed map that remembers insertion order.
///
/// A key maps to a present value or is not in the map at all: inserting
/// [`Value::Absent`] removes the key, so "absent" and "missing" are the same
/// state. Equality compares keys and values and ignores order.
///
/// ```
/// # use confluence::doc::{Map, Value};
/// let mut map = Map::new();
/// map.insert("b", 1);
/// map.insert("a", 2);
/// assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "a"]);
///
/// map.insert("b", Value::Absent);
/// assert!(!map.contains_key("b"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Map {
    entries: IndexMap<String, Value>,
}

impl Map {
    /// Creates an empty map
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Number of keys present
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no key is present
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value stored under `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns a mutable reference to the value stored under `key`
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Returns true if `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Sets `key` to `value`, returning the previous value.
    ///
    /// Inserting [`Value::Absent`] removes the key. An existing key keeps its
    /// position; a new key is appended.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        match value.into() {
            Value::Absent => self.remove(&key),
            value => self.entries.insert(key, value),
        }
    }

    /// Removes `key`, preserving the order of the remaining keys
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Iterates keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the child under `key`, inserting `default()` first if missing.
    ///
    /// `default` must not produce [`Value::Absent`]; patching uses this to
    /// create intermediate containers.
    pub(crate) fn get_or_insert_with(
        &mut self,
        key: &str,
        default: impl FnOnce() -> Value,
    ) -> &mut Value {
        self.entries.entry(key.to_string()).or_insert_with(default)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Map::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
