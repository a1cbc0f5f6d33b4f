//! Recursive-descent JSON parser.
//!
//! Builds a [`Document`] directly in its arena, one recursion per nested
//! value. The grammar is standard JSON plus `//`-to-end-of-line comments
//! wherever whitespace may appear, and the relaxed number form lexed by
//! [`crate::scan`]. String payloads are borrowed from the source text as
//! written; escape sequences are not decoded.
//!
//! Each recursive call returns a `Result`, so the first failure unwinds the
//! whole parse. There is no recovery and no partial document.
//!
//! Numeric precision is whatever `f64` conversion gives: a literal beyond
//! its range (`1e999`) saturates to infinity rather than failing, and such
//! a value serializes to text that no longer re-parses.

use crate::error::{JsonError, JsonResult};
use crate::scan::{self, Scanner};
use crate::tree::{Document, NodeId, Value};
use std::borrow::Cow;

/// Parse a JSON document from text.
///
/// The returned document borrows its keys and string values from `text`;
/// use [`Document::into_owned`] when it must outlive the buffer. Trailing
/// text after the first complete top-level value is ignored.
///
/// # Errors
///
/// See [`JsonError`]: end of input inside a construct is
/// [`UnexpectedEnd`](JsonError::UnexpectedEnd), a wrong structural byte is
/// [`Syntax`](JsonError::Syntax), bad keys and values report
/// [`BadKey`](JsonError::BadKey) / [`BadValue`](JsonError::BadValue).
pub fn parse_str(text: &str) -> JsonResult<Document<'_>> {
    let mut parser = Parser {
        scan: Scanner::new(text),
        doc: Document::new(),
    };
    parser.doc.set_source(text);
    let root = parser.doc.root();
    parser.parse_value(root)?;
    Ok(parser.doc)
}

struct Parser<'a> {
    scan: Scanner<'a>,
    doc: Document<'a>,
}

impl<'a> Parser<'a> {
    /// Skip trivia and fail with `UnexpectedEnd` if nothing follows.
    fn significant(&mut self) -> JsonResult<u8> {
        if !self.scan.skip_trivia()? {
            return Err(JsonError::UnexpectedEnd);
        }
        self.scan.peek().ok_or(JsonError::UnexpectedEnd)
    }

    fn parse_value(&mut self, node: NodeId) -> JsonResult<()> {
        match self.significant()? {
            b'n' | b't' | b'f' => self.parse_keyword(node),
            b'"' => {
                let (start, end) = self.scan.string_span().ok_or(JsonError::BadValue)?;
                let text = self.scan.slice(start, end);
                self.doc.set_value(node, Value::String(Cow::Borrowed(text)));
                Ok(())
            }
            b'[' => self.parse_array(node),
            b'{' => self.parse_object(node),
            b if scan::is_number_start(b) => {
                let number = self.scan.number().ok_or(JsonError::BadValue)?;
                self.doc.set_value(node, Value::Number(number));
                Ok(())
            }
            _ => Err(JsonError::Syntax),
        }
    }

    fn parse_keyword(&mut self, node: NodeId) -> JsonResult<()> {
        let value = if self.scan.eat(b"null") {
            Value::Null
        } else if self.scan.eat(b"true") {
            Value::Bool(true)
        } else if self.scan.eat(b"false") {
            Value::Bool(false)
        } else {
            return Err(JsonError::Syntax);
        };
        self.doc.set_value(node, value);
        Ok(())
    }

    fn parse_array(&mut self, node: NodeId) -> JsonResult<()> {
        self.scan.advance();
        self.doc.set_value(node, Value::Array(Vec::new()));
        if self.significant()? == b']' {
            self.scan.advance();
            return Ok(());
        }
        loop {
            let child = self.doc.add_child(node).ok_or(JsonError::Unknown)?;
            self.parse_value(child)?;
            self.significant()?;
            match self.scan.advance() {
                Some(b',') => {}
                Some(b']') => return Ok(()),
                _ => return Err(JsonError::Syntax),
            }
        }
    }

    fn parse_object(&mut self, node: NodeId) -> JsonResult<()> {
        self.scan.advance();
        self.doc.set_value(node, Value::Object(Vec::new()));
        if self.significant()? == b'}' {
            self.scan.advance();
            return Ok(());
        }
        loop {
            if self.significant()? != b'"' {
                return Err(JsonError::BadKey);
            }
            let (start, end) = self.scan.string_span().ok_or(JsonError::BadKey)?;
            let key = self.scan.slice(start, end);
            let child = self.doc.add_child(node).ok_or(JsonError::Unknown)?;
            self.doc.set_key(child, key);
            if self.significant()? != b':' {
                return Err(JsonError::Syntax);
            }
            self.scan.advance();
            self.parse_value(child)?;
            self.significant()?;
            match self.scan.advance() {
                Some(b',') => {}
                Some(b'}') => return Ok(()),
                _ => return Err(JsonError::Syntax),
            }
        }
    }
}
