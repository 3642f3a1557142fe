//! Ordered dedup index keyed by first-name hash.
//!
//! The index maps each observed key to one canonical [`Entry`]; later
//! arrivals with the same key are appended to that entry's duplicate chain.
//! A `BTreeMap` keeps traversal in ascending key order independent of
//! insertion order, so reports are stable across runs.
//!
//! # Type Decisions
//!
//! **Why an ordered map instead of a hash table?**
//! Traversal order must be deterministic and reproducible for output
//! stability. Keys are already uniformly distributed 64-bit hashes, so no
//! secondary comparator is needed.
//!
//! **Why no explicit teardown method?**
//! The index exclusively owns every entry and its duplicate chain; dropping
//! the index releases everything. Readers only borrow during traversal.

use std::collections::BTreeMap;

use serde::Serialize;

/// Canonical record for one observed key.
///
/// Created on the first line whose first name hashed to `key`; afterwards
/// only `duplicates` grows.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub full_name: String,
    pub first_name: String,
    pub key: u64,
    pub duplicates: Vec<Duplicate>,
}

/// A full name whose first name hashed to an already-seen key.
#[derive(Debug, Clone, Serialize)]
pub struct Duplicate {
    pub full_name: String,
}

/// Ordered mapping from key to canonical entry.
#[derive(Debug, Default)]
pub struct DedupIndex {
    entries: BTreeMap<u64, Entry>,
}

impl DedupIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new canonical entry for `key`, or append `full_name` to the
    /// existing entry's duplicate chain.
    ///
    /// On a merge the freshly parsed `first_name` is discarded; the first
    /// arrival's spelling stays authoritative. Equality is decided by key
    /// alone, so two different first names that hash to the same key are
    /// merged as duplicates of one entry.
    pub fn insert_or_merge(&mut self, key: u64, full_name: String, first_name: String) {
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.duplicates.push(Duplicate { full_name });
        } else {
            self.entries.insert(
                key,
                Entry {
                    full_name,
                    first_name,
                    key,
                    duplicates: Vec::new(),
                },
            );
        }
    }

    /// Look up the canonical entry for `key`.
    pub fn get(&self, key: u64) -> Option<&Entry> {
        self.entries.get(&key)
    }

    /// Iterate entries in ascending key order.
    ///
    /// Restartable; each call walks the full index from the smallest key
    /// without mutating it.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
