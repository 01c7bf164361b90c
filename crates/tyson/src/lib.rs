//! # tyson
//!
//! Type-safe navigation of dynamic JSON objects, without a schema.
//!
//! JSON parsed into a [`serde_json::Value`] has no fixed shape: any key may be
//! missing, and any value may turn out to be of a different type than
//! expected. tyson hides the matching and existence checks behind getters
//! that follow a list of keys and narrow the result to one type. Every getter
//! returns a [`Node`], which is empty if anything along the way did not fit.
//!
//! ## Quick start
//!
//! ```rust
//! use tyson::Document;
//!
//! let doc = Document::parse(r#"{"obj":{"num":12.34,"int":12345,"str":"abc"},"arr":[true,false]}"#).unwrap();
//! let o = doc.object();
//!
//! assert_eq!(o.get_f64(&["obj", "num"]).value(), 12.34);
//! assert_eq!(o.get_int(&["obj", "int"]).value(), 12345);
//! assert_eq!(o.get_str(&["obj", "str"]).value(), "abc");
//! assert_eq!(o.get_bools(&["arr"]).value(), vec![true, false]);
//!
//! // Missing keys and wrong types fall back to a default.
//! assert!(o.get(&["xyz"]).is_empty());
//! assert_eq!(o.get_str(&["obj", "num"]).or_else(|| "def"), "def");
//! ```
//!
//! ## Modules
//!
//! - [`node`] — `Node<T>`, the optional result of every lookup
//! - [`mapper`] — type-narrowing conversions and the `all` / `one` combinators
//! - [`object`] — `Object`, key traversal and typed getters
//! - [`document`] — `Document`, an owned root object with `set` / `remove`
//! - [`path`] — dotted key paths (`"a.b.c"`)
//! - [`error`] — Error types for document construction

pub mod document;
pub mod error;
pub mod mapper;
pub mod node;
pub mod object;
pub mod path;

pub use document::Document;
pub use error::{Result, TysonError};
pub use node::{Node, Zero};
pub use object::Object;
pub use path::KeyPath;
