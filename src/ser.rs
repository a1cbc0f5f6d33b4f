//! Indented JSON serialization.
//!
//! Walks a subtree and re-emits it as formatted text: four spaces per
//! nesting depth, one child per line, the closing bracket back at the
//! parent's indent. String payloads are written exactly as stored, with no
//! re-escaping, mirroring the parser's no-unescaping contract so a parsed
//! string round-trips byte for byte.
//!
//! Numbers render through `f64`'s `Display` (shortest round-trip decimal).
//! A non-finite value, such as an overflowed literal saturated to infinity,
//! renders as `inf`, which is not valid JSON and will not re-parse.

use crate::tree::{Document, NodeId, Value};
use std::io::{self, Write};

/// One level of indentation.
const INDENT: &str = "    ";

fn put<W: Write>(w: &mut W, s: &str) -> io::Result<usize> {
    w.write_all(s.as_bytes())?;
    Ok(s.len())
}

/// Write a node and its subtree as indented JSON.
///
/// Returns the number of bytes written.
pub fn write_json<W: Write>(w: &mut W, doc: &Document<'_>, id: NodeId) -> io::Result<usize> {
    write_node(w, doc, id, 0)
}

/// Write the document root followed by a trailing newline.
pub fn write_document<W: Write>(w: &mut W, doc: &Document<'_>) -> io::Result<usize> {
    let written = write_node(w, doc, doc.root(), 0)?;
    Ok(written + put(w, "\n")?)
}

/// Render a subtree to a `String`.
pub fn to_string(doc: &Document<'_>, id: NodeId) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_node(&mut buf, doc, id, 0);
    String::from_utf8(buf).unwrap_or_default()
}

fn write_node<W: Write>(
    w: &mut W,
    doc: &Document<'_>,
    id: NodeId,
    depth: u32,
) -> io::Result<usize> {
    let mut written = 0;
    for _ in 0..depth {
        written += put(w, INDENT)?;
    }
    let node = doc.get(id);
    if let Some(parent) = node.parent() {
        if doc.get(parent).is_object() {
            written += put(w, "\"")?;
            written += put(w, node.key().unwrap_or(""))?;
            written += put(w, "\": ")?;
        }
    }
    match node.value() {
        Value::Null => written += put(w, "null")?,
        Value::Bool(true) => written += put(w, "true")?,
        Value::Bool(false) => written += put(w, "false")?,
        Value::Number(n) => written += put(w, &n.to_string())?,
        Value::String(s) => {
            written += put(w, "\"")?;
            written += put(w, s)?;
            written += put(w, "\"")?;
        }
        Value::Object(children) | Value::Array(children) => {
            let (open, close) = if node.is_object() {
                ("{", "}")
            } else {
                ("[", "]")
            };
            written += put(w, open)?;
            written += put(w, "\n")?;
            for (i, &child) in children.iter().enumerate() {
                written += write_node(w, doc, child, depth + 1)?;
                if i + 1 != children.len() {
                    written += put(w, ",\n")?;
                }
            }
            written += put(w, "\n")?;
            for _ in 0..depth {
                written += put(w, INDENT)?;
            }
            written += put(w, close)?;
        }
    }
    Ok(written)
}
