//! jsonc-tree: an in-memory JSON document model with a comment-tolerant
//! parser, a pretty-printing serializer, and a small path-query language
//! for locating nested values.
//!
//! The crate targets embedding: programs that need a mutable JSON tree
//! without a heavyweight dependency.
//!
//! # Architecture
//!
//! - [`tree`] - the node arena: [`Document`], [`NodeId`] handles, mutation
//!   and lookup
//! - [`parser`] - recursive-descent parser for JSON with `//` line comments
//! - [`ser`] - indented serialization back to text
//! - [`keypath`] - the `"key"[index]->"key2"` query language
//! - [`file`] - whole-file read/write collaborators
//! - [`error`] - the [`JsonError`] taxonomy
//!
//! Parsed documents borrow their keys and string values from the source
//! text as raw spans (escape sequences are kept as written and re-emitted
//! verbatim); [`Document::into_owned`] detaches a tree from its buffer.
//!
//! The tree is plain data with no interior mutability: one logical owner
//! mutates it at a time, and handles stay valid across container growth.
//!
//! # Example
//!
//! ```
//! use jsonc_tree::{get_item_str, parse_str, to_string};
//!
//! let doc = parse_str(r#"{"pins": [10, 20, {"slot": "open"}]}"#).unwrap();
//! let slot = get_item_str(&doc, r#""pins"[2]->"slot""#, doc.root()).unwrap();
//! assert_eq!(doc.get(slot).as_str(), Some("open"));
//!
//! let text = to_string(&doc, doc.root());
//! assert!(text.starts_with("{\n    \"pins\": ["));
//! ```

// Library code must avoid unwrap/expect/panic; failures travel in Results.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod error;
pub mod file;
pub mod keypath;
pub mod parser;
mod scan;
pub mod ser;
pub mod tree;

// Re-export commonly used items
pub use error::{JsonError, JsonResult};
pub use file::{read_json_file, write_json_file};
pub use keypath::{get_item, get_item_str, parse_key_path, PathSegment};
pub use parser::parse_str;
pub use ser::{to_string, write_document, write_json};
pub use tree::{Document, Node, NodeId, Value};
