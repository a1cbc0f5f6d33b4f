//! The keyPath query language.
//!
//! A path locates a nested value by a chain of key and index lookups:
//!
//! ```text
//! "pins"[3]->"position"[1]->"slot"
//! ```
//!
//! Grammar: `Path := '"' KEYCHARS '"' ('[' INTEGER ']')? ('->' Path)?`.
//! Each `->`-separated component becomes one [`PathSegment`]; the segments
//! form a singly-linked chain borrowing their keys from the query string.
//!
//! Resolution walks the document: key lookup in an object, then (when an
//! index is present) element lookup in the array found under that key, then
//! recursion into the child segment. Any miss along the way resolves the
//! whole path to "not found" — there are no partial results.

use crate::error::{JsonError, JsonResult};
use crate::scan::Scanner;
use crate::tree::{Document, NodeId};

/// The chaining token between path components.
const INTO: &[u8] = b"->";

/// One component of a parsed keyPath.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment<'q> {
    key: &'q str,
    index: Option<i64>,
    child: Option<Box<PathSegment<'q>>>,
}

impl<'q> PathSegment<'q> {
    /// The quoted key, borrowed from the query string.
    pub fn key(&self) -> &'q str {
        self.key
    }

    /// The bracketed array index, if the component had one.
    pub fn index(&self) -> Option<i64> {
        self.index
    }

    /// The next component of the chain.
    pub fn child(&self) -> Option<&PathSegment<'q>> {
        self.child.as_deref()
    }
}

/// Parse a keyPath query string into a segment chain.
///
/// # Errors
///
/// Any structural mismatch (missing quote, missing `]`, text after a
/// component that is neither the end of the string nor `->`) is
/// [`JsonError::Path`].
pub fn parse_key_path(path: &str) -> JsonResult<PathSegment<'_>> {
    let mut scan = Scanner::new(path);
    parse_segment(&mut scan)
}

fn parse_segment<'q>(scan: &mut Scanner<'q>) -> JsonResult<PathSegment<'q>> {
    let (start, end) = scan.string_span().ok_or(JsonError::Path)?;
    let mut segment = PathSegment {
        key: scan.slice(start, end),
        index: None,
        child: None,
    };
    if scan.at_end() {
        return Ok(segment);
    }
    if scan.peek() == Some(b'[') {
        scan.advance();
        segment.index = Some(scan.decimal());
        if scan.advance() != Some(b']') {
            return Err(JsonError::Path);
        }
        if scan.at_end() {
            return Ok(segment);
        }
    }
    if !scan.eat(INTO) {
        return Err(JsonError::Path);
    }
    segment.child = Some(Box::new(parse_segment(scan)?));
    Ok(segment)
}

/// Resolve a parsed path against a document, starting at `root`.
///
/// Returns `None` when any key is missing, any index is negative or out of
/// range, the keyed lookup target is not an object, or the indexed target
/// is not an array.
pub fn get_item(doc: &Document<'_>, segment: &PathSegment<'_>, root: NodeId) -> Option<NodeId> {
    let mut found = doc.find_by_key(root, segment.key)?;
    if let Some(index) = segment.index {
        let index = usize::try_from(index).ok()?;
        found = doc.find_by_index(found, index)?;
    }
    match segment.child() {
        Some(child) => get_item(doc, child, found),
        None => Some(found),
    }
}

/// Parse a keyPath string and resolve it in one step.
///
/// A malformed path resolves to `None`, the same as a miss.
pub fn get_item_str(doc: &Document<'_>, path: &str, root: NodeId) -> Option<NodeId> {
    let segment = parse_key_path(path).ok()?;
    get_item(doc, &segment, root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;

    #[test]
    fn test_parse_single_key() {
        let segment = parse_key_path(r#""pins""#).unwrap();
        assert_eq!(segment.key(), "pins");
        assert_eq!(segment.index(), None);
        assert!(segment.child().is_none());
    }

    #[test]
    fn test_parse_key_with_index() {
        let segment = parse_key_path(r#""pins"[3]"#).unwrap();
        assert_eq!(segment.key(), "pins");
        assert_eq!(segment.index(), Some(3));
    }

    #[test]
    fn test_parse_chain() {
        let segment = parse_key_path(r#""pins"[3]->"position"[1]->"slot""#).unwrap();
        assert_eq!(segment.key(), "pins");
        assert_eq!(segment.index(), Some(3));
        let position = segment.child().unwrap();
        assert_eq!(position.key(), "position");
        assert_eq!(position.index(), Some(1));
        let slot = position.child().unwrap();
        assert_eq!(slot.key(), "slot");
        assert_eq!(slot.index(), None);
        assert!(slot.child().is_none());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_key_path("pins"), Err(JsonError::Path));
        assert_eq!(parse_key_path(r#""pins"#), Err(JsonError::Path));
        assert_eq!(parse_key_path(r#""pins"[3"#), Err(JsonError::Path));
        assert_eq!(parse_key_path(r#""pins"[3] extra"#), Err(JsonError::Path));
        assert_eq!(parse_key_path(r#""a"->"#), Err(JsonError::Path));
        assert_eq!(parse_key_path(r#""a"-"b""#), Err(JsonError::Path));
    }

    fn pins_doc() -> crate::tree::Document<'static> {
        parse_str(r#"{"pins": [10, 20, {"slot": "open"}]}"#)
            .unwrap()
            .into_owned()
    }

    #[test]
    fn test_resolve_key_index_chain() {
        let doc = pins_doc();
        let slot = get_item_str(&doc, r#""pins"[2]->"slot""#, doc.root()).unwrap();
        assert_eq!(doc.get(slot).as_str(), Some("open"));
    }

    #[test]
    fn test_resolve_index_only() {
        let doc = pins_doc();
        let second = get_item_str(&doc, r#""pins"[1]"#, doc.root()).unwrap();
        assert_eq!(doc.get(second).as_f64(), Some(20.0));
    }

    #[test]
    fn test_resolve_misses() {
        let doc = pins_doc();
        assert!(get_item_str(&doc, r#""pins"[5]->"slot""#, doc.root()).is_none());
        assert!(get_item_str(&doc, r#""missing""#, doc.root()).is_none());
        assert!(get_item_str(&doc, r#""pins"[-1]"#, doc.root()).is_none());
        // Indexing a non-array misses rather than erroring.
        assert!(get_item_str(&doc, r#""pins"[2]->"slot"[0]"#, doc.root()).is_none());
    }

    #[test]
    fn test_resolve_malformed_path_is_none() {
        let doc = pins_doc();
        assert!(get_item_str(&doc, "pins", doc.root()).is_none());
    }

    #[test]
    fn test_resolve_key_lookup_needs_object() {
        let doc = pins_doc();
        let pins = get_item_str(&doc, r#""pins""#, doc.root()).unwrap();
        // The found node is the array itself; a keyed lookup inside it misses.
        let segment = parse_key_path(r#""slot""#).unwrap();
        assert!(get_item(&doc, &segment, pins).is_none());
    }
}
