//! Dotted key paths.
//!
//! A key path is a compact way of writing the key list taken by
//! [`crate::Object::get`]:
//!
//! - `""` -- no keys; addresses the root object itself
//! - `"name"` -- the top-level key `name`
//! - `"event.creator.email"` -- `email` inside `creator` inside `event`
//!
//! Keys are split on every dot, so a key that itself contains a dot cannot
//! be written as a path. Pass such keys to [`crate::Object::get`] directly.

use std::fmt;

/// A parsed key path, split on dots.
///
/// For example, `"items.owner.name"` becomes `["items", "owner", "name"]`.
///
/// ```
/// use tyson::KeyPath;
///
/// assert_eq!(KeyPath::parse("a.b.c").keys(), ["a", "b", "c"]);
/// assert!(KeyPath::parse("").keys().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath<'a> {
    segments: Vec<&'a str>,
}

impl<'a> KeyPath<'a> {
    /// Parse a dot-separated path into keys. Segments are taken verbatim,
    /// including empty ones: `"a..b"` is `["a", "", "b"]`.
    pub fn parse(path: &'a str) -> Self {
        if path.is_empty() {
            return Self {
                segments: Vec::new(),
            };
        }
        Self {
            segments: path.split('.').collect(),
        }
    }

    /// The keys in traversal order.
    pub fn keys(&self) -> &[&'a str] {
        &self.segments
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` for the root path.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for KeyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_on_dots() {
        let path = KeyPath::parse("event.creator.email");
        assert_eq!(path.keys(), ["event", "creator", "email"]);
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn empty_path_has_no_keys() {
        let path = KeyPath::parse("");
        assert!(path.is_empty());
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn empty_segments_are_kept() {
        assert_eq!(KeyPath::parse("a..b").keys(), ["a", "", "b"]);
        assert_eq!(KeyPath::parse(".").keys(), ["", ""]);
    }

    #[test]
    fn display_joins_keys() {
        assert_eq!(KeyPath::parse("x.y").to_string(), "x.y");
    }
}
