//! Whole-file collaborators.
//!
//! Thin wrappers around the text parser and the serializer: read an entire
//! file and parse it, or serialize a subtree into a freshly truncated file.
//! Every I/O failure surfaces as [`JsonError::File`] and a failed read never
//! attempts a parse.

use crate::error::{JsonError, JsonResult};
use crate::parser::parse_str;
use crate::ser::write_json;
use crate::tree::{Document, NodeId};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Read and parse a JSON file.
///
/// The whole file is read before parsing begins. The returned document owns
/// its keys and strings, so it outlives the transient read buffer.
///
/// # Errors
///
/// [`JsonError::File`] for any open or read failure (including content that
/// is not valid UTF-8); parse failures keep their own categories.
pub fn read_json_file(path: impl AsRef<Path>) -> JsonResult<Document<'static>> {
    let text = fs::read_to_string(path).map_err(JsonError::from)?;
    let doc = parse_str(&text)?;
    Ok(doc.into_owned())
}

/// Serialize a subtree into a file, truncating it first.
///
/// A trailing newline follows the value. Returns the byte count written.
///
/// # Errors
///
/// [`JsonError::File`] for any open or write failure.
pub fn write_json_file(
    path: impl AsRef<Path>,
    doc: &Document<'_>,
    id: NodeId,
) -> JsonResult<usize> {
    let mut file = fs::File::create(path)?;
    let written = write_json(&mut file, doc, id)?;
    file.write_all(b"\n")?;
    Ok(written + 1)
}
