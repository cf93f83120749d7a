//! Insertion-ordered key/value mapping.
//!
//! Properties files are rewritten in full on every save, so the order in
//! which keys were first seen is what keeps the on-disk layout stable:
//!
//! - overwriting an existing key keeps its original position;
//! - a new key is appended after every existing one.
//!
//! Nothing is ever removed.

use std::collections::HashMap;

/// An ordered mapping from property key to property value.
#[derive(Debug, Clone, Default)]
pub struct Entries {
    /// Key/value pairs in first-insertion order.
    pairs: Vec<(String, String)>,
    /// Position of each key inside `pairs`.
    index: HashMap<String, usize>,
}

impl Entries {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites `key`.
    ///
    /// Returns the previous value when the key was already present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&pos) => Some(std::mem::replace(&mut self.pairs[pos].1, value)),
            None => {
                self.index.insert(key.clone(), self.pairs.len());
                self.pairs.push((key, value));
                None
            }
        }
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&pos| self.pairs[pos].1.as_str())
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut String> {
        match self.index.get(key) {
            Some(&pos) => Some(&mut self.pairs[pos].1),
            None => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }
}

/// Two mappings are equal when they hold the same pairs in the same order.
impl PartialEq for Entries {
    fn eq(&self, other: &Self) -> bool {
        self.pairs == other.pairs
    }
}

impl Eq for Entries {}

impl<'a> IntoIterator for &'a Entries {
    type Item = (&'a str, &'a str);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, String)>,
        fn(&'a (String, String)) -> (&'a str, &'a str),
    >;

    fn into_iter(self) -> Self::IntoIter {
        fn as_strs(pair: &(String, String)) -> (&str, &str) {
            (pair.0.as_str(), pair.1.as_str())
        }
        self.pairs.iter().map(as_strs as fn(&'a (String, String)) -> (&'a str, &'a str))
    }
}

impl<K, V> FromIterator<(K, V)> for Entries
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut entries = Entries::new();
        entries.extend(iter);
        entries
    }
}

impl<K, V> Extend<(K, V)> for Entries
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}
