// src/types/collections.rs
//! Keyed collections built from listing results.
//!
//! Smartsheet does not enforce unique names for attachments, folders or
//! sheets. Building a lookup map therefore has to decide what happens on a
//! collision: the first item seen keeps the key, the later one is reported
//! and dropped.

use super::{Warning, WarningLevel};
use indexmap::IndexMap;
use std::fmt;
use std::hash::Hash;
use std::ops::Deref;

/// Something with a human-readable identifier for log and warning output.
pub trait Labeled {
    fn label(&self) -> String;
}

/// A key collision observed while building a [`KeyedMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKey {
    pub key: String,
    pub retained: String,
    pub discarded: String,
}

impl fmt::Display for DuplicateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "duplicate key '{}': kept {}, discarded {}",
            self.key, self.retained, self.discarded
        )
    }
}

impl From<&DuplicateKey> for Warning {
    fn from(duplicate: &DuplicateKey) -> Self {
        Warning::new(
            WarningLevel::Warning,
            format!("duplicate key '{}'", duplicate.key),
        )
        .with_context(format!(
            "kept {}, discarded {}",
            duplicate.retained, duplicate.discarded
        ))
    }
}

/// Insertion-ordered map with first-wins collision handling.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedMap<K, V>
where
    K: Hash + Eq,
{
    entries: IndexMap<K, V>,
    duplicates: Vec<DuplicateKey>,
}

impl<K, V> KeyedMap<K, V>
where
    K: Hash + Eq,
{
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            duplicates: Vec::new(),
        }
    }

    /// Collisions seen while the map was built, in encounter order.
    pub fn duplicates(&self) -> &[DuplicateKey] {
        &self.duplicates
    }

    pub fn warnings(&self) -> Vec<Warning> {
        self.duplicates.iter().map(Warning::from).collect()
    }

    pub fn into_inner(self) -> IndexMap<K, V> {
        self.entries
    }

    pub fn into_parts(self) -> (IndexMap<K, V>, Vec<DuplicateKey>) {
        (self.entries, self.duplicates)
    }
}

impl<K, V> KeyedMap<K, V>
where
    K: Hash + Eq + fmt::Display,
    V: Labeled,
{
    /// Inserts unless the key is taken; a taken key is reported, not replaced.
    pub fn insert_first(&mut self, key: K, value: V) -> bool {
        if let Some(existing) = self.entries.get(&key) {
            let duplicate = DuplicateKey {
                key: key.to_string(),
                retained: existing.label(),
                discarded: value.label(),
            };
            log::warn!(
                "duplicate key '{}' - keeping {} and discarding {}",
                duplicate.key,
                duplicate.retained,
                duplicate.discarded
            );
            self.duplicates.push(duplicate);
            false
        } else {
            self.entries.insert(key, value);
            true
        }
    }
}

impl<K, V> Default for KeyedMap<K, V>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Deref for KeyedMap<K, V>
where
    K: Hash + Eq,
{
    type Target = IndexMap<K, V>;

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl<'a, K, V> IntoIterator for &'a KeyedMap<K, V>
where
    K: Hash + Eq,
{
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Builds a map keyed by `key_fn`, keeping the first item seen for each key.
pub fn build_keyed_map<K, V, I, F>(items: I, key_fn: F) -> KeyedMap<K, V>
where
    I: IntoIterator<Item = V>,
    F: Fn(&V) -> K,
    K: Hash + Eq + fmt::Display,
    V: Labeled,
{
    let mut map = KeyedMap::new();
    for item in items {
        let key = key_fn(&item);
        map.insert_first(key, item);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Named {
        name: &'static str,
        id: u32,
    }

    impl Labeled for Named {
        fn label(&self) -> String {
            format!("{}(id:{})", self.name, self.id)
        }
    }

    fn named(name: &'static str, id: u32) -> Named {
        Named { name, id }
    }

    #[test]
    fn test_first_seen_item_wins() {
        let items = vec![named("a", 1), named("a", 2), named("b", 3)];

        let map = build_keyed_map(items, |item| item.name.to_string());

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a").map(|n| n.id), Some(1));
        assert_eq!(map.get("b").map(|n| n.id), Some(3));
        assert_eq!(map.duplicates().len(), 1);

        let duplicate = &map.duplicates()[0];
        assert_eq!(duplicate.key, "a");
        assert!(duplicate.retained.contains("id:1"));
        assert!(duplicate.discarded.contains("id:2"));
    }

    #[test]
    fn test_empty_input_builds_empty_map() {
        let map = build_keyed_map(Vec::<Named>::new(), |item| item.id);
        assert!(map.is_empty());
        assert!(map.duplicates().is_empty());
        assert!(map.warnings().is_empty());
    }

    #[test]
    fn test_preserves_insertion_order() {
        let items = vec![named("z", 1), named("m", 2), named("a", 3)];
        let map = build_keyed_map(items, |item| item.name);
        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec!["z", "m", "a"]);
    }

    #[test]
    fn test_duplicate_becomes_warning() {
        let items = vec![named("x", 10), named("x", 11), named("x", 12)];
        let map = build_keyed_map(items, |item| item.name);
        let warnings = map.warnings();
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].level, WarningLevel::Warning);
        assert_eq!(
            warnings[1].context.as_deref(),
            Some("kept x(id:10), discarded x(id:12)")
        );
    }
}
