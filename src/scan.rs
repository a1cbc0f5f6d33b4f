//! Low-level text scanning.
//!
//! A byte cursor over the source text shared by the JSON parser and the
//! keyPath parser: trivia skipping (whitespace and `//` comments), raw
//! string spans with backslash escapes, and the number lexers.
//!
//! Strings are never unescaped at this layer; a span is the raw payload
//! between the quotes, exactly as it appears in the source.

use crate::error::{JsonError, JsonResult};

/// True for an ASCII decimal digit.
#[inline]
pub(crate) fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// True for `+` or `-`.
#[inline]
pub(crate) fn is_sign(b: u8) -> bool {
    b == b'+' || b == b'-'
}

/// True for a byte that may start a numeric literal.
#[inline]
pub(crate) fn is_number_start(b: u8) -> bool {
    is_digit(b) || is_sign(b)
}

/// Cursor over a source string.
///
/// The input is truncated at the first NUL byte: the text contract treats
/// the buffer as terminated there, and nothing past it is ever consumed.
pub(crate) struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        let end = text.as_bytes().iter().position(|&b| b == 0);
        let text = match end {
            Some(end) => &text[..end],
            None => text,
        };
        Self { text, pos: 0 }
    }

    /// Current byte offset.
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Peek at the current byte without consuming it.
    pub(crate) fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    /// Consume and return the current byte.
    pub(crate) fn advance(&mut self) -> Option<u8> {
        let b = self.peek();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }

    /// Borrow a previously scanned byte span from the source.
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.text[start..end]
    }

    /// Consume `expected` if the input continues with it.
    pub(crate) fn eat(&mut self, expected: &[u8]) -> bool {
        if self.text.as_bytes()[self.pos..].starts_with(expected) {
            self.pos += expected.len();
            true
        } else {
            false
        }
    }

    /// Skip whitespace and `//`-to-end-of-line comments.
    ///
    /// Returns `Ok(true)` positioned on the next significant byte and
    /// `Ok(false)` at end of input. A comment that is still open when the
    /// input ends is an error: the line it would terminate on never comes.
    pub(crate) fn skip_trivia(&mut self) -> JsonResult<bool> {
        loop {
            match self.peek() {
                None => return Ok(false),
                Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r') => {
                    self.advance();
                }
                Some(b'/') if self.text.as_bytes().get(self.pos + 1) == Some(&b'/') => {
                    self.pos += 2;
                    loop {
                        match self.advance() {
                            None => return Err(JsonError::UnexpectedEnd),
                            Some(b'\n') => break,
                            Some(_) => {}
                        }
                    }
                }
                Some(_) => return Ok(true),
            }
        }
    }

    /// Scan a string literal, returning the raw payload span.
    ///
    /// Must be positioned on the opening `"`. A backslash escapes the byte
    /// after it (including another backslash); the payload is not decoded.
    /// Returns `None` when there is no opening or closing quote.
    pub(crate) fn string_span(&mut self) -> Option<(usize, usize)> {
        if self.peek() != Some(b'"') {
            return None;
        }
        self.advance();
        let start = self.pos;
        loop {
            match self.advance() {
                None => return None,
                Some(b'"') => return Some((start, self.pos - 1)),
                Some(b'\\') => {
                    self.advance();
                }
                Some(_) => {}
            }
        }
    }

    /// Lex a numeric literal: `[+-][0-9]*[.]?[0-9]*([eE][+-]?[0-9]+)?`.
    ///
    /// One `.` and one `e`/`E` at most; the exponent may carry one sign of
    /// its own. A dangling exponent marker with no digits after it (`1.1e`,
    /// `1.1e+`) is trimmed back off the consumed span. A span with no digit
    /// before the exponent marker (a lone `.`) fails.
    pub(crate) fn number(&mut self) -> Option<f64> {
        let bytes = &self.text.as_bytes()[self.pos..];
        let first = *bytes.first()?;
        let mut saw_dot = first == b'.';
        let mut saw_digit = is_digit(first);
        let mut saw_exp = false;
        let mut saw_exp_sign = false;
        let mut saw_exp_digit = false;
        if !is_number_start(first) && !saw_dot {
            return None;
        }
        let mut i = 1;
        while let Some(&b) = bytes.get(i) {
            if is_digit(b) {
                if saw_exp {
                    saw_exp_digit = true;
                } else {
                    saw_digit = true;
                }
            } else if !saw_dot && b == b'.' {
                saw_dot = true;
            } else if !saw_exp && (b == b'e' || b == b'E') {
                // No fraction dot may follow the exponent either.
                saw_dot = true;
                saw_exp = true;
            } else if saw_exp && !saw_exp_sign && !saw_exp_digit && is_sign(b) {
                saw_exp_sign = true;
            } else {
                break;
            }
            i += 1;
        }
        if saw_exp && !saw_exp_digit {
            i -= 1 + usize::from(saw_exp_sign);
        }
        if saw_dot && !saw_digit {
            return None;
        }
        let span = self.slice(self.pos, self.pos + i);
        let number = span.parse::<f64>().ok()?;
        self.pos += i;
        Some(number)
    }

    /// Lex an optionally signed decimal integer, stopping at the first
    /// non-digit. Zero when no digits are present.
    pub(crate) fn decimal(&mut self) -> i64 {
        let mut negative = false;
        if let Some(b) = self.peek() {
            if is_sign(b) {
                negative = b == b'-';
                self.advance();
            }
        }
        let mut value: i64 = 0;
        while let Some(b) = self.peek() {
            if !is_digit(b) {
                break;
            }
            value = value.wrapping_mul(10).wrapping_add(i64::from(b - b'0'));
            self.advance();
        }
        if negative {
            -value
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_number(input: &str) -> Option<(f64, usize)> {
        let mut scan = Scanner::new(input);
        scan.number().map(|n| (n, scan.pos()))
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(lex_number("42"), Some((42.0, 2)));
        assert_eq!(lex_number("-12.5"), Some((-12.5, 5)));
        assert_eq!(lex_number("+3"), Some((3.0, 2)));
        assert_eq!(lex_number("0.25"), Some((0.25, 4)));
    }

    #[test]
    fn test_exponents() {
        assert_eq!(lex_number("1e5"), Some((1e5, 3)));
        assert_eq!(lex_number("1e+5"), Some((1e5, 4)));
        assert_eq!(lex_number("2.5E-2"), Some((0.025, 6)));
    }

    #[test]
    fn test_dangling_exponent_trimmed() {
        // "1.1e" and "1.1e+" are the number 1.1 with the marker left over.
        assert_eq!(lex_number("1.1e"), Some((1.1, 3)));
        assert_eq!(lex_number("1.1e+"), Some((1.1, 3)));
        assert_eq!(lex_number("7e-"), Some((7.0, 1)));
    }

    #[test]
    fn test_lone_dot_fails() {
        assert_eq!(lex_number("."), None);
        assert_eq!(lex_number(".e5"), None);
    }

    #[test]
    fn test_number_stops_at_delimiter() {
        assert_eq!(lex_number("10,"), Some((10.0, 2)));
        assert_eq!(lex_number("3.5]"), Some((3.5, 3)));
    }

    #[test]
    fn test_trivia_skips_whitespace_and_comments() {
        let mut scan = Scanner::new("  \t\r\n // note\n  x");
        assert_eq!(scan.skip_trivia(), Ok(true));
        assert_eq!(scan.peek(), Some(b'x'));
    }

    #[test]
    fn test_trivia_at_end() {
        let mut scan = Scanner::new("   // tail\n \n");
        assert_eq!(scan.skip_trivia(), Ok(false));
    }

    #[test]
    fn test_unterminated_comment() {
        let mut scan = Scanner::new("// never closed");
        assert_eq!(scan.skip_trivia(), Err(JsonError::UnexpectedEnd));
    }

    #[test]
    fn test_lone_slash_is_significant() {
        let mut scan = Scanner::new(" /x");
        assert_eq!(scan.skip_trivia(), Ok(true));
        assert_eq!(scan.peek(), Some(b'/'));
    }

    #[test]
    fn test_string_span_raw_payload() {
        let mut scan = Scanner::new(r#""a\"b\\" rest"#);
        let (start, end) = scan.string_span().unwrap();
        assert_eq!(scan.slice(start, end), r#"a\"b\\"#);
    }

    #[test]
    fn test_string_span_missing_quote() {
        let mut scan = Scanner::new(r#""open ended"#);
        assert_eq!(scan.string_span(), None);
        let mut scan = Scanner::new("x");
        assert_eq!(scan.string_span(), None);
    }

    #[test]
    fn test_decimal() {
        let mut scan = Scanner::new("128]");
        assert_eq!(scan.decimal(), 128);
        assert_eq!(scan.peek(), Some(b']'));
        let mut scan = Scanner::new("-7");
        assert_eq!(scan.decimal(), -7);
        let mut scan = Scanner::new("x");
        assert_eq!(scan.decimal(), 0);
    }

    #[test]
    fn test_nul_terminates_input() {
        let mut scan = Scanner::new("12\0 34");
        assert_eq!(scan.number(), Some(12.0));
        assert_eq!(scan.skip_trivia(), Ok(false));
    }
}
