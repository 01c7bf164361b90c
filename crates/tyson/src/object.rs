//! Read-only navigation of a JSON object.
//!
//! [`Object`] is a cheap, copyable view over a [`serde_json::Value`] that is
//! known to be a JSON object. Its getters follow a list of keys through
//! nested objects and narrow whatever they find to the requested type. Every
//! getter returns a [`Node`]: empty when a key is missing, when an
//! intermediate value is not an object, or when the target has the wrong
//! type. None of them can fail in any other way.
//!
//! Getters borrow from the underlying tree; nothing is cloned.

use std::sync::LazyLock;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::trace;

use crate::mapper::{all, as_array, as_bool, as_f64, as_int, as_object, as_str};
use crate::node::{Node, Zero};
use crate::path::KeyPath;

/// Backs [`Object::default`], the zero value of an empty `Node<Object>`.
static EMPTY: LazyLock<Value> = LazyLock::new(|| Value::Object(Map::new()));

/// A read-only view of a JSON object.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tyson::Object;
///
/// let value = json!({"obj": {"num": 42, "str": "abc"}, "arr": [true, false]});
/// let o = Object::new(&value).unwrap();
///
/// assert_eq!(o.get_int(&["obj", "num"]).value(), 42);
/// assert_eq!(o.get_str(&["obj", "str"]).value(), "abc");
/// assert_eq!(o.get_bools(&["arr"]).value(), vec![true, false]);
///
/// // Wrong type and missing key both come back empty.
/// assert!(o.get_str(&["obj", "num"]).is_empty());
/// assert_eq!(o.get_str(&["xyz"]).or("def"), "def");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Object<'a> {
    /// Always a `Value::Object`.
    value: &'a Value,
}

impl<'a> Object<'a> {
    /// Wraps `value` if it is a JSON object.
    pub fn new(value: &'a Value) -> Option<Self> {
        value.is_object().then_some(Self { value })
    }

    /// The object as a `serde_json::Value`.
    pub fn as_value(self) -> &'a Value {
        self.value
    }

    /// The object's entries.
    pub fn as_map(self) -> &'a Map<String, Value> {
        match self.value {
            Value::Object(map) => map,
            _ => unreachable!("Object always wraps a JSON object"),
        }
    }

    /// Returns `true` if `key` is present in this object. Nested objects are
    /// not searched.
    pub fn has(self, key: &str) -> bool {
        self.as_map().contains_key(key)
    }

    /// Number of entries in this object.
    pub fn len(self) -> usize {
        self.as_map().len()
    }

    /// Returns `true` if this object has no entries.
    pub fn is_empty(self) -> bool {
        self.as_map().is_empty()
    }

    /// Follows `keys` through nested objects and returns the raw value found
    /// at the end.
    ///
    /// With no keys the result holds this object itself. Otherwise every key
    /// but the last must name a nested object; traversal stops at the first
    /// key that is missing or names something else, and the result is empty.
    /// The last key may name a value of any type.
    ///
    /// ```
    /// use serde_json::json;
    /// use tyson::Object;
    ///
    /// let value = json!({"a": {"b": {"c": "d"}}});
    /// let o = Object::new(&value).unwrap();
    ///
    /// assert_eq!(o.get(&["a", "b", "c"]).into_option(), Some(&json!("d")));
    /// assert!(o.get(&["a", "b", "c", "d"]).is_empty());
    /// assert_eq!(o.get(&[]).into_option(), Some(&value));
    /// ```
    pub fn get(self, keys: &[&str]) -> Node<&'a Value> {
        match keys {
            [] => Node::Value(self.value),
            [key] => self.entry(key),
            [parents @ .., last] => {
                let mut current = self;
                for (depth, key) in parents.iter().enumerate() {
                    match current.entry(key).map(as_object) {
                        Node::Value(next) => current = next,
                        Node::Empty => {
                            trace!(key, depth, "traversal stopped: no nested object");
                            return Node::Empty;
                        }
                    }
                }
                current.entry(last)
            }
        }
    }

    /// Like [`Object::get`], with the keys given as a dotted path such as
    /// `"a.b.c"`. See [`KeyPath`] for the syntax.
    pub fn lookup(self, path: &str) -> Node<&'a Value> {
        self.get(KeyPath::parse(path).keys())
    }

    fn entry(self, key: &str) -> Node<&'a Value> {
        self.as_map().get(key).into()
    }

    // ------------------------------------------------------------------------
    // Scalar getters
    // ------------------------------------------------------------------------

    /// Fetches a JSON array. See [`Object::get`] for how `keys` are followed.
    pub fn get_array(self, keys: &[&str]) -> Node<&'a [Value]> {
        self.get(keys).map(as_array)
    }

    /// Fetches a JSON boolean.
    pub fn get_bool(self, keys: &[&str]) -> Node<bool> {
        self.get(keys).map(as_bool)
    }

    /// Fetches a JSON number as `f64`.
    pub fn get_f64(self, keys: &[&str]) -> Node<f64> {
        self.get(keys).map(as_f64)
    }

    /// Fetches a JSON number with no fractional part as `i64`. A number such
    /// as `12.5` yields an empty node. See [`as_int`] for the exact rule.
    pub fn get_int(self, keys: &[&str]) -> Node<i64> {
        self.get_f64(keys).map(as_int)
    }

    /// Fetches a nested JSON object.
    pub fn get_object(self, keys: &[&str]) -> Node<Object<'a>> {
        self.get(keys).map(as_object)
    }

    /// Fetches a JSON string.
    pub fn get_str(self, keys: &[&str]) -> Node<&'a str> {
        self.get(keys).map(as_str)
    }

    // ------------------------------------------------------------------------
    // Array getters
    //
    // Each is empty unless the target is an array whose items all have the
    // requested type.
    // ------------------------------------------------------------------------

    /// Fetches a JSON array of arrays.
    pub fn get_arrays(self, keys: &[&str]) -> Node<Vec<&'a [Value]>> {
        self.get_array(keys).map(all::<&'a [Value], _, _>(as_array))
    }

    /// Fetches a JSON array of booleans.
    pub fn get_bools(self, keys: &[&str]) -> Node<Vec<bool>> {
        self.get_array(keys).map(all::<&'a [Value], _, _>(as_bool))
    }

    /// Fetches a JSON array of numbers.
    pub fn get_f64s(self, keys: &[&str]) -> Node<Vec<f64>> {
        self.get_array(keys).map(all::<&'a [Value], _, _>(as_f64))
    }

    /// Fetches a JSON array of integral numbers.
    pub fn get_ints(self, keys: &[&str]) -> Node<Vec<i64>> {
        self.get_f64s(keys).map(all::<Vec<f64>, _, _>(as_int))
    }

    /// Fetches a JSON array of objects.
    pub fn get_objects(self, keys: &[&str]) -> Node<Vec<Object<'a>>> {
        self.get_array(keys).map(all::<&'a [Value], _, _>(as_object))
    }

    /// Fetches a JSON array of strings.
    pub fn get_strs(self, keys: &[&str]) -> Node<Vec<&'a str>> {
        self.get_array(keys).map(all::<&'a [Value], _, _>(as_str))
    }
}

/// The empty object.
impl Default for Object<'_> {
    fn default() -> Self {
        Self { value: &EMPTY }
    }
}

impl Zero for Object<'_> {
    fn zero() -> Self {
        Self::default()
    }
}

impl Serialize for Object<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'a> TryFrom<&'a Value> for Object<'a> {
    type Error = crate::error::TysonError;

    fn try_from(value: &'a Value) -> crate::error::Result<Self> {
        Object::new(value).ok_or_else(|| crate::error::TysonError::not_an_object(value))
    }
}
