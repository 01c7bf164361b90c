//! The optional-value container returned by every lookup.
//!
//! A [`Node`] either holds a value of type `T` or holds nothing. Absence is
//! the only failure mode of a lookup: a missing key, a value of the wrong
//! JSON type and a non-integral number all produce [`Node::Empty`], and the
//! node does not record which of these happened.

use serde::{Serialize, Serializer};
use serde_json::Value;

/// A container which may or may not hold a value of type `T`.
///
/// Nodes are immutable. They are produced by [`crate::Object`] accessors and
/// by [`Node::map`], and are meant to be consumed right away with one of
/// [`Node::value`], [`Node::or`], [`Node::or_else`] or [`Node::into_option`].
///
/// # Examples
///
/// ```
/// use tyson::Node;
///
/// let present = Node::Value(42_i64);
/// let absent: Node<i64> = Node::Empty;
///
/// assert_eq!(present.or(7), 42);
/// assert_eq!(absent.or(7), 7);
/// assert_eq!(absent.value(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node<T> {
    /// No value is present.
    Empty,
    /// A value is present.
    Value(T),
}

impl<T> Node<T> {
    /// Returns `true` if no value is present.
    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }

    /// Returns the contained value, or `default` if this node is empty.
    ///
    /// The default is evaluated eagerly; use [`Node::or_else`] when it is
    /// expensive to build.
    pub fn or(self, default: T) -> T {
        match self {
            Node::Value(v) => v,
            Node::Empty => default,
        }
    }

    /// Returns the contained value, or the result of `f` if this node is
    /// empty. `f` is not called when a value is present.
    pub fn or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Node::Value(v) => v,
            Node::Empty => f(),
        }
    }

    /// Converts the value through `mapper`.
    ///
    /// The result is empty if this node is empty or if the mapper rejects the
    /// contained value. The mapper is never called on an empty node.
    ///
    /// ```
    /// use tyson::{mapper, Node};
    ///
    /// assert_eq!(Node::Value(42.0).map(mapper::as_int), Node::Value(42));
    /// assert_eq!(Node::Value(42.5).map(mapper::as_int), Node::Empty);
    /// ```
    pub fn map<U, F>(self, mapper: F) -> Node<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Node::Value(v) => mapper(v).into(),
            Node::Empty => Node::Empty,
        }
    }

    /// Borrows the contained value.
    pub fn as_ref(&self) -> Node<&T> {
        match self {
            Node::Value(v) => Node::Value(v),
            Node::Empty => Node::Empty,
        }
    }

    /// Converts this node into an [`Option`].
    pub fn into_option(self) -> Option<T> {
        match self {
            Node::Value(v) => Some(v),
            Node::Empty => None,
        }
    }
}

impl<T: Zero> Node<T> {
    /// Returns the contained value, or the zero value of `T` if this node is
    /// empty.
    ///
    /// Call [`Node::is_empty`] first when an absent value must be told apart
    /// from a present zero value.
    ///
    /// ```
    /// use serde_json::{json, Value};
    /// use tyson::Object;
    ///
    /// let value = json!({"foo": "bar"});
    /// let o = Object::new(&value).unwrap();
    ///
    /// assert_eq!(o.get(&["foo"]).value(), &json!("bar"));
    /// assert_eq!(o.get(&["xyz"]).value(), &Value::Null);
    /// ```
    pub fn value(self) -> T {
        self.or_else(T::zero)
    }
}

/// The value an empty [`Node`] yields from [`Node::value`].
///
/// Implemented for every type a getter can return, including the raw
/// `&Value` of [`crate::Object::get`], whose zero value is `null`.
pub trait Zero {
    /// The zero value.
    fn zero() -> Self;
}

static NULL: Value = Value::Null;

impl Zero for &Value {
    fn zero() -> Self {
        &NULL
    }
}

impl Zero for &str {
    fn zero() -> Self {
        ""
    }
}

impl<T> Zero for &[T] {
    fn zero() -> Self {
        &[]
    }
}

impl<T> Zero for Vec<T> {
    fn zero() -> Self {
        Vec::new()
    }
}

impl<T> Zero for Option<T> {
    fn zero() -> Self {
        None
    }
}

macro_rules! zero_by_default {
    ($($t:ty),* $(,)?) => {
        $(
            impl Zero for $t {
                fn zero() -> Self {
                    <$t>::default()
                }
            }
        )*
    };
}

zero_by_default!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String, Value,
);

impl<T> Default for Node<T> {
    fn default() -> Self {
        Node::Empty
    }
}

impl<T> From<Option<T>> for Node<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => Node::Value(v),
            None => Node::Empty,
        }
    }
}

impl<T> From<Node<T>> for Option<T> {
    fn from(node: Node<T>) -> Self {
        node.into_option()
    }
}

/// Serializes like an [`Option`]: empty nodes become `null`.
impl<T: Serialize> Serialize for Node<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Node::Value(v) => serializer.serialize_some(v),
            Node::Empty => serializer.serialize_none(),
        }
    }
}
