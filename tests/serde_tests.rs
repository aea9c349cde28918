#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! Only `Entry` is serializable; containers are left to the caller.

use std::collections::HashMap;

use mapops::entry::Entry;
use mapops::maps;
use rstest::rstest;

#[rstest]
fn test_entry_json_roundtrip() {
    let entry = Entry::new("key".to_string(), 42);

    let json = serde_json::to_string(&entry).unwrap();
    let restored: Entry<String, i32> = serde_json::from_str(&json).unwrap();

    assert_eq!(entry, restored);
}

#[rstest]
fn test_entry_json_shape() {
    let entry = Entry::new("a", 1);
    let json = serde_json::to_value(entry).unwrap();
    assert_eq!(json, serde_json::json!({ "key": "a", "value": 1 }));
}

#[rstest]
fn test_entries_snapshot_rebuilds_map_after_roundtrip() {
    let map: HashMap<String, i32> =
        maps::from_entries([("a".to_string(), 1), ("b".to_string(), 2)]);

    let json = serde_json::to_string(&maps::entries(&map)).unwrap();
    let entries: Vec<Entry<String, i32>> = serde_json::from_str(&json).unwrap();
    let restored: HashMap<String, i32> = maps::from_entries(entries);

    assert_eq!(restored, map);
}
