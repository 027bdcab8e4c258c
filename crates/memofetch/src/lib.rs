// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Memoizes fetched values by key.
//!
//! This crate provides [`MemoizingLookup`], a compute-if-absent map: a lookup
//! returns the cached value for a key when one exists, and otherwise runs a
//! caller-supplied fetch function, stores its result, and returns it. The
//! fetch runs at most once per distinct key over the lifetime of the
//! instance.
//!
//! # When to Use
//!
//! Use `MemoizingLookup` for deterministic, side-effect-tolerant fetches
//! whose results never go stale:
//!
//! - **Reference data**: per-id records loaded once and reused
//! - **Derived values**: expensive computations keyed by their inputs
//!
//! It is an explicit simplification, not a general cache: there is no
//! eviction, no TTL, and no size bound. Entries are immutable once stored
//! and live as long as the instance, so an unbounded key space means
//! unbounded memory. Reach for a real caching layer when staleness or
//! capacity matter.
//!
//! # Example
//!
//! ```
//! use memofetch::MemoizingLookup;
//!
//! let mut lookup = MemoizingLookup::new();
//!
//! let first = lookup.get(123, |id| format!("user-{id}"));
//! let again = lookup.get(123, |_| unreachable!("cached keys are not refetched"));
//!
//! assert_eq!(first, "user-123");
//! assert_eq!(again, "user-123");
//! assert_eq!(lookup.hits(), 1);
//! ```
//!
//! # Thread Safety
//!
//! `MemoizingLookup` is single-threaded by design: lookups take `&mut self`
//! and there is no interior locking. Wrap an instance in the synchronization
//! of your choice if it must be shared.

use std::collections::HashMap;
use std::hash::Hash;

/// A compute-if-absent map with no eviction.
///
/// Keys need `Eq + Hash`; values are handed back by clone, so cheaply
/// cloneable value types (or `Arc`-wrapped ones) work best.
///
/// # Examples
///
/// ```
/// use memofetch::MemoizingLookup;
///
/// let mut squares: MemoizingLookup<u32, u64> = MemoizingLookup::new();
/// assert_eq!(squares.get(12, |n| u64::from(n * n)), 144);
/// assert!(squares.contains(&12));
/// ```
#[derive(Debug)]
pub struct MemoizingLookup<K, V> {
    entries: HashMap<K, V>,
    hits: u64,
}

impl<K, V> Default for MemoizingLookup<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
        }
    }
}

impl<K, V> MemoizingLookup<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    /// Creates an empty lookup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for `key`, fetching and storing it on first use.
    ///
    /// On a hit the stored value is returned and `fetch` is not called. On a
    /// miss `fetch(&key)` runs synchronously, its result is stored, and a
    /// clone is returned. Both outcomes emit a `tracing` debug event; the
    /// observation is for logs only and correctness never depends on it.
    ///
    /// # Examples
    ///
    /// ```
    /// use memofetch::MemoizingLookup;
    ///
    /// let mut lookup = MemoizingLookup::new();
    /// let value = lookup.get("user:123", |key| key.len());
    /// assert_eq!(value, 8);
    /// ```
    pub fn get<F>(&mut self, key: K, fetch: F) -> V
    where
        F: FnOnce(&K) -> V,
    {
        if let Some(value) = self.entries.get(&key) {
            self.hits += 1;
            tracing::debug!(lookup.activity = "hit", lookup.entries = self.entries.len(), "lookup.event");
            return value.clone();
        }

        tracing::debug!(lookup.activity = "miss", lookup.entries = self.entries.len(), "lookup.event");
        let value = fetch(&key);
        self.entries.insert(key, value.clone());
        value
    }

    /// Returns the number of lookups answered from the stored entries.
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been stored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if a value is stored for `key`.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }
}
