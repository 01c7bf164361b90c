//! Property-based tests for traversal, lifting, and the integral rule.
//!
//! Strategies generate:
//! - Random JSON values up to a few levels deep (objects, arrays, scalars)
//! - Random key paths drawn from a small alphabet, so that hits and misses
//!   both occur often
//! - Random whole and fractional numbers

use proptest::prelude::*;
use serde_json::{Map, Number, Value};
use tyson::mapper::{all, as_int};
use tyson::{Node, Object};

// ============================================================================
// Strategies
// ============================================================================

/// Keys from a tiny alphabet so generated paths often exist.
fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![Just("a"), Just("b"), Just("c")].prop_map(str::to_string)
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| Value::Number(n.into())),
        (-1e6f64..1e6).prop_map(|f| Number::from_f64(f).map_or(Value::Null, Value::Number)),
        "[a-z]{0,8}".prop_map(Value::String),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec((arb_key(), inner), 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

fn arb_object() -> impl Strategy<Value = Value> {
    prop::collection::vec((arb_key(), arb_value()), 0..4)
        .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>()))
}

fn arb_path() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_key(), 0..5)
}

/// Reference traversal: walk the path one key at a time with serde_json.
fn walk<'a>(root: &'a Value, path: &[String]) -> Option<&'a Value> {
    let mut current = root;
    for key in path {
        current = current.as_object()?.get(key)?;
    }
    Some(current)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn get_agrees_with_reference_walk(root in arb_object(), path in arb_path()) {
        let o = Object::new(&root).unwrap();
        let keys: Vec<&str> = path.iter().map(String::as_str).collect();

        prop_assert_eq!(o.get(&keys).into_option(), walk(&root, &path));
    }

    #[test]
    fn lookup_agrees_with_get(root in arb_object(), path in arb_path()) {
        prop_assume!(!path.is_empty());
        let o = Object::new(&root).unwrap();
        let keys: Vec<&str> = path.iter().map(String::as_str).collect();

        prop_assert_eq!(o.lookup(&path.join(".")), o.get(&keys));
    }

    #[test]
    fn empty_path_yields_root(root in arb_object()) {
        let o = Object::new(&root).unwrap();
        prop_assert_eq!(o.get(&[]), Node::Value(&root));
    }

    #[test]
    fn whole_numbers_are_integral(n in -(1i64 << 52)..(1i64 << 52)) {
        prop_assert_eq!(as_int(n as f64), Some(n));
    }

    #[test]
    fn fractional_numbers_are_not_integral(n in -1_000_000i64..1_000_000, frac in 0.001f64..0.999) {
        prop_assert_eq!(as_int(n as f64 + frac), None);
    }

    #[test]
    fn all_succeeds_iff_every_item_succeeds(items in prop::collection::vec(-100i32..100, 0..20)) {
        let even = |v: i32| (v % 2 == 0).then_some(v / 2);
        let lifted = all(even)(items.clone());

        if items.iter().all(|v| v % 2 == 0) {
            let halves: Vec<i32> = items.iter().map(|v| v / 2).collect();
            prop_assert_eq!(lifted, Some(halves));
        } else {
            prop_assert_eq!(lifted, None);
        }
    }
}
