//! Mappers: total conversions from one type into another.
//!
//! A mapper is any function or closure `Fn(S) -> Option<T>`. It returns
//! `Some` when the input has the expected shape and `None` otherwise; it never
//! panics and has no side effects. The primitives in this module narrow a
//! dynamic [`serde_json::Value`] to one concrete JSON type, and the
//! combinators [`all`] and [`one`] build new mappers out of existing ones.
//!
//! Mappers plug into [`crate::Node::map`], which is how every typed accessor
//! of [`crate::Object`] is built.

use serde_json::Value;

use crate::object::Object;

/// Narrows a value to a JSON array.
pub fn as_array(v: &Value) -> Option<&[Value]> {
    v.as_array().map(Vec::as_slice)
}

/// Narrows a value to a JSON boolean.
pub fn as_bool(v: &Value) -> Option<bool> {
    v.as_bool()
}

/// Narrows a value to a JSON number, read as `f64`.
///
/// Integers stored by the decoder as `i64` or `u64` are converted; those
/// beyond 2^53 lose precision in the process.
pub fn as_f64(v: &Value) -> Option<f64> {
    v.as_f64()
}

/// Narrows a value to a JSON object.
pub fn as_object(v: &Value) -> Option<Object<'_>> {
    Object::new(v)
}

/// Narrows a value to a JSON string.
pub fn as_str(v: &Value) -> Option<&str> {
    v.as_str()
}

/// Converts a number to an integer if it has no fractional part.
///
/// The test is a round trip through truncation: `x` is accepted when
/// `(x as i64) as f64 == x`. Magnitudes from 2^52 up cannot carry a
/// fractional part in an `f64`, so every such value in range passes.
///
/// Rust's `as` cast saturates. That rejects finite values outside the `i64`
/// range, except `2^63` itself: it saturates to `i64::MAX`, which rounds back
/// to `2^63`, so `as_int(2^63)` is `Some(i64::MAX)` even though the result is
/// not equal to the input. Platforms whose float-to-int conversion yields
/// `i64::MIN` for out-of-range input (such as x86-64 `cvttsd2si`) reject that
/// value instead. `NaN` and infinities are rejected.
///
/// ```
/// use tyson::mapper::as_int;
///
/// assert_eq!(as_int(42.0), Some(42));
/// assert_eq!(as_int(-7.0), Some(-7));
/// assert_eq!(as_int(42.01), None);
/// ```
pub fn as_int(v: f64) -> Option<i64> {
    let w = v as i64;
    (w as f64 == v).then_some(w)
}

/// Lifts `mapper` to convert every item of a sequence.
///
/// The returned mapper succeeds only if `mapper` succeeds on each item, and
/// then yields the converted items in their original order. It stops at the
/// first item that fails.
///
/// ```
/// use tyson::mapper::{all, as_int};
///
/// let ints = all(as_int);
/// assert_eq!(ints(vec![1.0, 2.0, 3.0]), Some(vec![1, 2, 3]));
/// assert_eq!(ints(vec![1.0, 2.5, 3.0]), None);
/// ```
pub fn all<I, T, M>(mapper: M) -> impl Fn(I) -> Option<Vec<T>>
where
    I: IntoIterator,
    M: Fn(I::Item) -> Option<T>,
{
    move |items| items.into_iter().map(&mapper).collect()
}

/// Combines `mappers` into one that tries each in turn.
///
/// The first mapper to succeed wins; the combined mapper fails only if every
/// one of them fails. Each mapper receives its own clone of the input.
/// Mappers of different types can be mixed as `&dyn Fn` trait objects,
/// including ones that accept any `&Value` lifetime.
///
/// ```
/// use serde_json::{json, Value};
/// use tyson::mapper::{one, as_f64};
/// use tyson::{Node, Object};
///
/// let value = json!({"num": 1.5, "text": "2.5", "flag": true});
/// let o = Object::new(&value).unwrap();
///
/// let parse = |v: &Value| v.as_str().and_then(|s| s.parse::<f64>().ok());
/// let mappers: [&dyn Fn(&Value) -> Option<f64>; 2] = [&as_f64, &parse];
///
/// assert_eq!(o.get(&["num"]).map(one(&mappers)), Node::Value(1.5));
/// assert_eq!(o.get(&["text"]).map(one(&mappers)), Node::Value(2.5));
/// assert!(o.get(&["flag"]).map(one(&mappers)).is_empty());
/// ```
pub fn one<'m, S, T, M>(mappers: &'m [M]) -> impl Fn(S) -> Option<T> + 'm
where
    S: Clone,
    M: Fn(S) -> Option<T>,
{
    move |v| mappers.iter().find_map(|m| m(v.clone()))
}
