//! The snapshot cache backing all post-initialization reads.

use alloc::vec::Vec;

use crate::key::PropertyKey;
use crate::value::{PropertyValue, ValueState};

/// In-memory populated set of key → value pairs.
///
/// Ordered by first insertion; overwriting a key updates it in place and
/// keeps its position. Backed by a plain vector: the populated set is
/// bounded by the mapping table, a few dozen entries at most, so a linear
/// scan beats any hashing scheme here.
///
/// Once populated, reads are deterministic and side-effect-free: nothing
/// in this type ever re-fetches from a reader.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyCache {
    entries: Vec<Entry>,
}

#[derive(Clone, Debug, PartialEq)]
struct Entry {
    key: PropertyKey,
    value: PropertyValue,
    state: ValueState,
}

impl PropertyCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of populated entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is populated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Key at `index` in insertion order.
    pub fn key_at(&self, index: usize) -> Option<PropertyKey> {
        self.entries.get(index).map(|entry| entry.key)
    }

    /// Value for `key`, if populated.
    pub fn get(&self, key: PropertyKey) -> Option<&PropertyValue> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
    }

    /// State tag for `key`, if populated.
    pub fn state(&self, key: PropertyKey) -> Option<ValueState> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.state)
    }

    /// Insert or overwrite the entry for `key`.
    pub fn set(&mut self, key: PropertyKey, value: PropertyValue, state: ValueState) {
        match self.entries.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => {
                entry.value = value;
                entry.state = state;
            }
            None => self.entries.push(Entry { key, value, state }),
        }
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyKey, &PropertyValue, ValueState)> {
        self.entries
            .iter()
            .map(|entry| (entry.key, &entry.value, entry.state))
    }
}
