#![cfg(feature = "serde")]
//! Serde round-trip tests.
//!
//! Lists and sets serialize as JSON arrays, maps as JSON objects, all in
//! insertion order. Deserialization funnels through the collections' own
//! construction semantics (dedup for sets, first-position/last-value for
//! maps).

use rstest::rstest;
use smallord::collections::{List, OrderedMap, OrderedSet};

// =============================================================================
// List
// =============================================================================

#[rstest]
fn test_list_serializes_as_json_array() {
    let list: List<i32, 4> = List::from_vec(vec![1, 2, 3]);
    assert_eq!(serde_json::to_string(&list).unwrap(), "[1,2,3]");
}

#[rstest]
fn test_list_round_trip_preserves_order() {
    let original: List<i32, 4> = (1..=10).collect();
    let encoded = serde_json::to_string(&original).unwrap();
    let decoded: List<i32, 4> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, original);
    assert_eq!(decoded.as_slice(), original.as_slice());
}

#[rstest]
fn test_list_deserializes_short_input_inline() {
    let decoded: List<i32, 4> = serde_json::from_str("[1,2]").unwrap();
    assert!(decoded.is_inline());
    assert_eq!(decoded.as_slice(), &[1, 2]);
}

#[rstest]
fn test_empty_list_round_trip() {
    let decoded: List<i32, 4> = serde_json::from_str("[]").unwrap();
    assert!(decoded.is_empty());
    assert_eq!(serde_json::to_string(&decoded).unwrap(), "[]");
}

// =============================================================================
// OrderedSet
// =============================================================================

#[rstest]
fn test_set_serializes_in_insertion_order() {
    let set: OrderedSet<i32, 4> = [3, 1, 2].into_iter().collect();
    assert_eq!(serde_json::to_string(&set).unwrap(), "[3,1,2]");
}

#[rstest]
fn test_set_deserialization_collapses_duplicates_to_first_occurrence() {
    let decoded: OrderedSet<i32, 4> = serde_json::from_str("[2,1,2,3,1]").unwrap();
    assert_eq!(decoded.as_slice(), &[2, 1, 3]);
}

// =============================================================================
// OrderedMap
// =============================================================================

#[rstest]
fn test_map_serializes_as_json_object_in_insertion_order() {
    let mut map: OrderedMap<String, i32> = OrderedMap::new();
    map.insert("b".to_string(), 2).unwrap();
    map.insert("a".to_string(), 1).unwrap();
    assert_eq!(serde_json::to_string(&map).unwrap(), "{\"b\":2,\"a\":1}");
}

#[rstest]
fn test_map_round_trip_preserves_document_order() {
    let encoded = "{\"z\":1,\"a\":2,\"m\":3}";
    let decoded: OrderedMap<String, i32> = serde_json::from_str(encoded).unwrap();

    let keys: Vec<&String> = decoded.keys().collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
    assert_eq!(serde_json::to_string(&decoded).unwrap(), encoded);
}

#[rstest]
fn test_map_deserialization_of_duplicate_keys_keeps_first_position_last_value() {
    let decoded: OrderedMap<String, i32> =
        serde_json::from_str("{\"a\":1,\"b\":2,\"a\":3}").unwrap();

    assert_eq!(decoded.len(), 2);
    let pairs: Vec<(&String, &i32)> = decoded.iter().collect();
    assert_eq!(*pairs[0].0, "a");
    assert_eq!(*pairs[0].1, 3);
    assert_eq!(*pairs[1].0, "b");
}

#[rstest]
fn test_nested_collections_round_trip() {
    // The JSON-tree shape the collections are meant to back: objects of
    // arrays.
    let mut map: OrderedMap<String, List<i32, 4>> = OrderedMap::new();
    map.insert("short".to_string(), List::from_vec(vec![1])).unwrap();
    map.insert("long".to_string(), (1..=6).collect()).unwrap();

    let encoded = serde_json::to_string(&map).unwrap();
    assert_eq!(encoded, "{\"short\":[1],\"long\":[1,2,3,4,5,6]}");

    let decoded: OrderedMap<String, List<i32, 4>> =
        serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, map);
}
