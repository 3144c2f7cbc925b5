#![cfg(feature = "serde")]

//! Integration tests for serde support in traversa.
//!
//! A list serializes as a plain sequence of its elements, head first, so it
//! is interchangeable with a `Vec` in any serde format.

use num_bigint::BigInt;
use rstest::rstest;
use rust_decimal::Decimal;
use traversa::prelude::*;

// =============================================================================
// PersistentList Integration Tests
// =============================================================================

#[rstest]
fn test_list_json_roundtrip() {
    let list: PersistentList<i32> = (1..=10).collect();
    let json = serde_json::to_string(&list).unwrap();
    let restored: PersistentList<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(list, restored);
}

#[rstest]
fn test_list_serializes_head_first() {
    let json = serde_json::to_string(&list![1, 2, 3]).unwrap();
    assert_eq!(json, "[1,2,3]");
}

#[rstest]
fn test_list_deserializes_from_vec_json() {
    let json = serde_json::to_string(&vec!["a", "b"]).unwrap();
    let restored: PersistentList<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, list!["a".to_string(), "b".to_string()]);
}

#[rstest]
fn test_empty_list_restores_canonical_empty() {
    let restored: PersistentList<i32> = serde_json::from_str("[]").unwrap();
    assert!(PersistentList::ptr_eq(&restored, &PersistentList::empty()));
}

#[rstest]
fn test_list_nested_structures() {
    let outer = list![list![1, 2, 3], list![], list![4]];
    let json = serde_json::to_string(&outer).unwrap();
    assert_eq!(json, "[[1,2,3],[],[4]]");
    let restored: PersistentList<PersistentList<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(outer, restored);
    assert_eq!(restored.flatten().unwrap(), list![1, 2, 3, 4]);
}

#[rstest]
fn test_windows_roundtrip() {
    let windows = list![1, 2, 3, 4, 5].grouped(2).unwrap();
    let json = serde_json::to_string(&windows).unwrap();
    assert_eq!(json, "[[1,2],[3,4],[5]]");
}

#[rstest]
fn test_big_integer_list_roundtrip() {
    let list = list![BigInt::from(u64::MAX) * 4, BigInt::from(-7)];
    let json = serde_json::to_string(&list).unwrap();
    let restored: PersistentList<BigInt> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.sum().unwrap(), list.sum().unwrap());
    assert_eq!(restored, list);
}

#[rstest]
fn test_decimal_list_roundtrip() {
    let list = list![Decimal::new(125, 2), Decimal::new(-5, 1)];
    let json = serde_json::to_string(&list).unwrap();
    let restored: PersistentList<Decimal> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, list);
    assert_eq!(restored.sum().unwrap(), Decimal::new(75, 2));
}

#[rstest]
fn test_invalid_json_is_rejected() {
    let result: serde_json::Result<PersistentList<i32>> = serde_json::from_str("[1, \"two\"]");
    assert!(result.is_err());
}
