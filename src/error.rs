//! Error handling for jsonc-tree.
//!
//! Every fallible entry point returns [`JsonResult`]. The first failure wins:
//! parsing unwinds without recovery and no partial document is produced.
//! Structural preconditions on the node store (container-only operations,
//! removing a node that is not a current child) are not errors in this
//! taxonomy; those operations signal failure through `Option`/`bool`.

use thiserror::Error;

/// Failure categories for parsing, path resolution and file I/O.
///
/// The numeric codes returned by [`JsonError::code`] are stable and leave
/// gaps for the two legacy statuses (`0` success, `1` just-initialized) that
/// a `Result` channel makes unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum JsonError {
    /// Internal inconsistency; never produced by well-formed input.
    #[error("unknown error")]
    Unknown,
    /// Input ended in the middle of a value, container or comment.
    #[error("unexpected end of input")]
    UnexpectedEnd,
    /// Structural mismatch: a separator, closer or value was expected.
    #[error("syntax error")]
    Syntax,
    /// An object member key was missing its quotes or left unterminated.
    #[error("bad object key")]
    BadKey,
    /// A string value was unterminated or a number failed to lex.
    #[error("bad value")]
    BadValue,
    /// Any open, read or write failure on the file collaborators.
    #[error("file error")]
    File,
    /// A keyPath query string failed to parse.
    #[error("bad key path")]
    Path,
}

impl JsonError {
    /// Get the numeric error code.
    pub fn code(&self) -> u32 {
        match self {
            JsonError::Unknown => 2,
            JsonError::UnexpectedEnd => 3,
            JsonError::Syntax => 4,
            JsonError::BadKey => 5,
            JsonError::BadValue => 6,
            JsonError::File => 7,
            JsonError::Path => 8,
        }
    }

    /// Get the error name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            JsonError::Unknown => "Unknown",
            JsonError::UnexpectedEnd => "UnexpectedEnd",
            JsonError::Syntax => "Syntax",
            JsonError::BadKey => "BadKey",
            JsonError::BadValue => "BadValue",
            JsonError::File => "File",
            JsonError::Path => "Path",
        }
    }
}

impl From<std::io::Error> for JsonError {
    fn from(_: std::io::Error) -> Self {
        // One coarse status, no distinction between "not found" and a
        // short read.
        JsonError::File
    }
}

/// Result type for jsonc-tree operations.
pub type JsonResult<T> = Result<T, JsonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(JsonError::Unknown.code(), 2);
        assert_eq!(JsonError::UnexpectedEnd.code(), 3);
        assert_eq!(JsonError::Syntax.code(), 4);
        assert_eq!(JsonError::BadKey.code(), 5);
        assert_eq!(JsonError::BadValue.code(), 6);
        assert_eq!(JsonError::File.code(), 7);
        assert_eq!(JsonError::Path.code(), 8);
    }

    #[test]
    fn test_names_match_variants() {
        assert_eq!(JsonError::Syntax.name(), "Syntax");
        assert_eq!(JsonError::Path.name(), "Path");
    }

    #[test]
    fn test_io_errors_collapse_to_file() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(JsonError::from(io), JsonError::File);
    }
}
