//! An owned root JSON object.
//!
//! [`Document`] is where a tree enters the crate. It guarantees that the root
//! is a JSON object, lends out the read-only [`Object`] view for navigation,
//! and carries the only mutating operations: [`Document::set`] and
//! [`Document::remove`]. Both act on the root's own keys and never descend
//! into nested objects.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{Result, TysonError};
use crate::object::Object;

/// An owned JSON object.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tyson::Document;
///
/// let mut doc = Document::parse(r#"{"a": {"b": 1}}"#).unwrap();
/// assert_eq!(doc.object().get_int(&["a", "b"]).value(), 1);
///
/// doc.set("c", json!("new"));
/// assert!(doc.has("c"));
/// doc.remove("a");
/// assert_eq!(doc.to_string(), r#"{"c":"new"}"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Always a `Value::Object`.
    root: Value,
}

impl Document {
    /// Creates a document with no keys.
    pub fn new() -> Self {
        Self::from_map(Map::new())
    }

    /// Creates a document from the entries of `map`.
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self {
            root: Value::Object(map),
        }
    }

    /// Parses JSON text into a document.
    ///
    /// # Errors
    ///
    /// Returns [`TysonError::JsonParse`] if `json` is not valid JSON, and
    /// [`TysonError::NotAnObject`] if its top level is not an object.
    pub fn parse(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::try_from(value)
    }

    /// The read-only view used for navigation.
    pub fn object(&self) -> Object<'_> {
        match Object::new(&self.root) {
            Some(object) => object,
            None => unreachable!("Document always holds a JSON object"),
        }
    }

    /// Returns `true` if `key` is present at the root.
    pub fn has(&self, key: &str) -> bool {
        self.map().contains_key(key)
    }

    /// Assigns `value` to `key` at the root, returning the value it replaced.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.map_mut().insert(key.into(), value.into())
    }

    /// Removes `key` from the root, returning its value. Removing a key that
    /// is not present does nothing.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        // shift_remove keeps the remaining keys in input order
        self.map_mut().shift_remove(key)
    }

    /// The root's entries.
    pub fn map(&self) -> &Map<String, Value> {
        self.object().as_map()
    }

    fn map_mut(&mut self) -> &mut Map<String, Value> {
        match &mut self.root {
            Value::Object(map) => map,
            _ => unreachable!("Document always holds a JSON object"),
        }
    }

    /// Borrows the root as a `serde_json::Value`.
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Consumes the document, returning the root `serde_json::Value`.
    pub fn into_value(self) -> Value {
        self.root
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Value> for Document {
    type Error = TysonError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self::from_map(map)),
            other => Err(TysonError::not_an_object(&other)),
        }
    }
}

impl From<Map<String, Value>> for Document {
    fn from(map: Map<String, Value>) -> Self {
        Self::from_map(map)
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        doc.into_value()
    }
}

impl FromStr for Document {
    type Err = TysonError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Compact JSON.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.root.serialize(serializer)
    }
}
