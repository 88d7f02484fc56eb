//! Ordered key/value storage for SLON objects.
//!
//! This module provides [`Map`], the payload of [`Value::Object`](crate::Value).
//! SLON does not require object keys to be unique, so `Map` is an ordered
//! list of entries rather than a hash map: `(a: 1, a: 2)` parses into two
//! entries, both keyed `a`, in source order.
//!
//! ## Duplicate keys
//!
//! - [`Map::push`] always appends; nothing is ever overwritten
//! - [`Map::get`] answers with the **last** entry for a key, which is what a
//!   serde map visitor inserting entries one by one would keep
//! - [`Map::get_all`] yields every entry for a key in order
//! - [`Map::into_index_map`] collapses duplicates into an [`IndexMap`]
//!
//! ## Examples
//!
//! ```rust
//! use slon::{Map, Value};
//!
//! let mut map = Map::new();
//! map.push("name".to_string(), Value::from("Alice"));
//! map.push("age".to_string(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::Value;
use indexmap::IndexMap;
use std::collections::TryReserveError;

/// An ordered list of `(key, value)` entries that tolerates duplicate keys.
///
/// # Examples
///
/// ```rust
/// use slon::{Map, Value};
///
/// let mut map = Map::new();
/// map.push("a".to_string(), Value::from(1));
/// map.push("a".to_string(), Value::from(2));
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get("a").and_then(|v| v.as_f64()), Some(2.0));
/// let all: Vec<_> = map.get_all("a").filter_map(|v| v.as_f64()).collect();
/// assert_eq!(all, vec![1.0, 2.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Map(Vec<(String, Value)>);

impl Map {
    /// Creates an empty `Map`.
    #[must_use]
    pub const fn new() -> Self {
        Map(Vec::new())
    }

    /// Creates an empty `Map` with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Map(Vec::with_capacity(capacity))
    }

    /// Appends an entry, keeping any earlier entries with the same key.
    pub fn push(&mut self, key: String, value: Value) {
        self.0.push((key, value));
    }

    /// Appends an entry, reporting allocation failure instead of aborting.
    pub(crate) fn try_push(&mut self, key: String, value: Value) -> Result<(), TryReserveError> {
        self.0.try_reserve(1)?;
        self.0.push((key, value));
        Ok(())
    }

    /// Returns the value of the last entry with this key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Returns the values of every entry with this key, in order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Value> + 'a {
        self.0
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    /// Returns the number of entries, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &String> + ExactSizeIterator + '_ {
        self.0.iter().map(|(k, _)| k)
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Value> + ExactSizeIterator + '_ {
        self.0.iter().map(|(_, v)| v)
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(
        &self,
    ) -> impl DoubleEndedIterator<Item = (&String, &Value)> + ExactSizeIterator + '_ {
        self.0.iter().map(|(k, v)| (k, v))
    }

    /// Collapses duplicate keys, keeping the last value for each key at the
    /// position where that key first appeared.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slon::parse;
    ///
    /// let value = parse("(a: 1, b: 2, a: 3)").unwrap();
    /// let map = value.as_object().unwrap().clone().into_index_map();
    /// let keys: Vec<_> = map.keys().cloned().collect();
    /// assert_eq!(keys, vec!["a", "b"]);
    /// assert_eq!(map["a"].as_f64(), Some(3.0));
    /// ```
    #[must_use]
    pub fn into_index_map(self) -> IndexMap<String, Value> {
        self.0.into_iter().collect()
    }
}

impl From<IndexMap<String, Value>> for Map {
    fn from(map: IndexMap<String, Value>) -> Self {
        Map(map.into_iter().collect())
    }
}

impl From<Vec<(String, Value)>> for Map {
    fn from(entries: Vec<(String, Value)>) -> Self {
        Map(entries)
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Map(Vec::from_iter(iter))
    }
}

impl Extend<(String, Value)> for Map {
    fn extend<T: IntoIterator<Item = (String, Value)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}
