// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Integration tests for `MemoizingLookup::get()`.

use std::cell::Cell;

use memofetch::MemoizingLookup;

#[test]
fn ensure_types() {
    static_assertions::assert_impl_all!(MemoizingLookup<String, String>: std::fmt::Debug, Default, Send, Sync);
}

#[test]
fn fetches_once_per_key() {
    let fetches = Cell::new(0_usize);
    let mut lookup = MemoizingLookup::new();

    let first = lookup.get(123, |id| {
        fetches.set(fetches.get() + 1);
        format!("user-{id}")
    });
    let second = lookup.get(123, |id| {
        fetches.set(fetches.get() + 1);
        format!("user-{id}")
    });

    assert_eq!(first, "user-123");
    assert_eq!(second, "user-123");
    assert_eq!(fetches.get(), 1, "second lookup must be served from the stored entry");
}

#[test]
fn distinct_keys_fetch_independently() {
    let fetches = Cell::new(0_usize);
    let mut lookup = MemoizingLookup::new();

    lookup.get(123, |id| {
        fetches.set(fetches.get() + 1);
        format!("user-{id}")
    });
    let other = lookup.get(456, |id| {
        fetches.set(fetches.get() + 1);
        format!("user-{id}")
    });

    assert_eq!(other, "user-456");
    assert_eq!(fetches.get(), 2);
    assert_eq!(lookup.len(), 2);
}

#[test]
fn hit_counter_tracks_only_hits() {
    let mut lookup = MemoizingLookup::new();
    assert_eq!(lookup.hits(), 0);

    lookup.get("a", |_| 1_i64);
    assert_eq!(lookup.hits(), 0, "a miss is not a hit");

    lookup.get("a", |_| 2_i64);
    lookup.get("a", |_| 3_i64);
    assert_eq!(lookup.hits(), 2);

    // The stored value never changed.
    assert_eq!(lookup.get("a", |_| 4_i64), 1);
}

#[test]
fn introspection_reflects_stored_keys() {
    let mut lookup = MemoizingLookup::new();
    assert!(lookup.is_empty());
    assert!(!lookup.contains(&"k"));

    lookup.get("k", |_| "v".to_owned());
    assert!(!lookup.is_empty());
    assert!(lookup.contains(&"k"));
    assert_eq!(lookup.len(), 1);
}

#[test]
fn stored_values_are_returned_by_clone() {
    let mut lookup = MemoizingLookup::new();

    let first = lookup.get(1, |_| vec![1, 2, 3]);
    let mut mutated = first.clone();
    mutated.push(4);

    // Mutating a returned clone never touches the stored entry.
    assert_eq!(lookup.get(1, |_| Vec::new()), vec![1, 2, 3]);
}
