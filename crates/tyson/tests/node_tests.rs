//! Tests for the `Node` container: presence, defaults, and mapping.

use std::cell::Cell;

use serde_json::{json, Value};
use tyson::Node;

// ============================================================================
// 1. Presence and extraction
// ============================================================================

#[test]
fn value_node_is_not_empty() {
    let node = Node::Value("abc");
    assert!(!node.is_empty());
    assert_eq!(node.value(), "abc");
}

#[test]
fn empty_node_value_is_default() {
    assert_eq!(Node::<i64>::Empty.value(), 0);
    assert!(!Node::<bool>::Empty.value());
    assert_eq!(Node::<&str>::Empty.value(), "");
    assert_eq!(Node::<Vec<f64>>::Empty.value(), Vec::<f64>::new());
}

#[test]
fn empty_raw_value_is_null() {
    assert_eq!(Node::<&Value>::Empty.value(), &Value::Null);
    assert_eq!(Node::<&[Value]>::Empty.value(), &[] as &[Value]);
    assert_eq!(Node::<Option<u8>>::Empty.value(), None);
}

#[test]
fn present_default_is_distinguishable_by_is_empty() {
    let zero = Node::Value(0_i64);
    let absent = Node::<i64>::Empty;

    assert_eq!(zero.value(), absent.value());
    assert!(!zero.is_empty());
    assert!(absent.is_empty());
}

#[test]
fn default_node_is_empty() {
    assert!(Node::<String>::default().is_empty());
}

// ============================================================================
// 2. Fallbacks
// ============================================================================

#[test]
fn or_prefers_contained_value() {
    assert_eq!(Node::Value(1).or(2), 1);
    assert_eq!(Node::Empty.or(2), 2);
}

#[test]
fn or_else_only_calls_supplier_when_empty() {
    let calls = Cell::new(0);
    let supplier = || {
        calls.set(calls.get() + 1);
        "def".to_string()
    };

    assert_eq!(Node::Value("abc".to_string()).or_else(supplier), "abc");
    assert_eq!(calls.get(), 0, "supplier must not run for a present value");

    assert_eq!(Node::Empty.or_else(supplier), "def");
    assert_eq!(calls.get(), 1);
}

// ============================================================================
// 3. Mapping
// ============================================================================

#[test]
fn map_converts_value() {
    let node = Node::Value(123).map(|v: i32| Some(v.to_string()));
    assert_eq!(node, Node::Value("123".to_string()));
}

#[test]
fn map_fails_when_mapper_fails() {
    let node = Node::Value(123).map(|_: i32| None::<String>);
    assert!(node.is_empty());
}

#[test]
fn map_on_empty_never_calls_mapper() {
    let called = Cell::new(false);
    let node = Node::<i32>::Empty.map(|v| {
        called.set(true);
        Some(v)
    });

    assert!(node.is_empty());
    assert!(!called.get());
}

// ============================================================================
// 4. Conversions
// ============================================================================

#[test]
fn option_roundtrip() {
    assert_eq!(Node::from(Some(5)), Node::Value(5));
    assert_eq!(Node::<i32>::from(None), Node::Empty);
    assert_eq!(Option::from(Node::Value(5)), Some(5));
    assert_eq!(Node::<i32>::Empty.into_option(), None);
}

#[test]
fn as_ref_borrows_contents() {
    let node = Node::Value(String::from("abc"));
    assert_eq!(node.as_ref().map(|s| Some(s.len())), Node::Value(3));
    assert_eq!(node.value(), "abc");
}

#[test]
fn serializes_like_option() {
    assert_eq!(serde_json::to_value(Node::Value(vec![1, 2])).unwrap(), json!([1, 2]));
    assert_eq!(serde_json::to_value(Node::<i32>::Empty).unwrap(), json!(null));
}
