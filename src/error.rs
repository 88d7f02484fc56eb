//! Error types for SLON parsing and serialization.
//!
//! Every failure is reported as a single [`Error`]. Parse failures carry the
//! byte offset at which the parser stopped together with an [`ErrorCode`],
//! which is one of a fixed set of diagnostic messages.
//!
//! ## Error Categories
//!
//! - **Syntax Errors**: malformed input, with position and diagnostic code
//! - **Out of Memory**: an allocation failed while parsing or serializing
//! - **Nesting Limits**: input or a value tree nests deeper than allowed
//! - **Invalid Arguments**: the caller handed over something unrepresentable
//! - **I/O Errors**: reader or writer failures
//!
//! ## Examples
//!
//! ```rust
//! use slon::{parse, ErrorCode};
//!
//! let err = parse("'abc").unwrap_err();
//! assert_eq!(err.position(), 4);
//! assert_eq!(err.code(), Some(ErrorCode::UnterminatedString));
//! assert_eq!(err.to_string(), "Unterminated string literal at position 4");
//! ```

use std::fmt;
use thiserror::Error;

/// The fixed set of diagnostics a parse can fail with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorCode {
    #[error("Unexpected end of input")]
    UnexpectedEof,

    #[error("Unexpected trailing content")]
    TrailingContent,

    /// A specific structural character was required.
    #[error("Expected '{0}'")]
    Expected(char),

    #[error("Expected ',' or ')'")]
    ExpectedCommaOrParen,

    #[error("Expected '|' or ']'")]
    ExpectedPipeOrBracket,

    #[error("Invalid number")]
    InvalidNumber,

    /// A numeric literal was followed by something other than a boundary.
    #[error("Invalid number boundary")]
    InvalidNumberBoundary,

    #[error("Non-finite number")]
    NonFiniteNumber,

    #[error("Unterminated string literal")]
    UnterminatedString,

    /// A backslash was the last byte of the input.
    #[error("Invalid escape sequence")]
    InvalidEscape,

    #[error("Invalid unicode escape")]
    InvalidUnicodeEscape,

    #[error("Unknown escape sequence")]
    UnknownEscape,

    /// An unquoted string (value or key) was empty.
    #[error("Empty string value")]
    EmptyString,

    #[error("Nesting too deep")]
    NestingTooDeep,

    #[error("Invalid UTF-8")]
    InvalidUtf8,

    #[error("Root value is not an object")]
    RootNotObject,

    #[error("Invalid date-time literal")]
    InvalidDateTime,
}

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The caller supplied input that cannot be represented
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// An allocation failed
    #[error("Out of memory at position {position}")]
    OutOfMemory { position: usize },

    /// Malformed SLON text
    #[error("{code} at position {position}")]
    Syntax { position: usize, code: ErrorCode },

    /// A value tree nests deeper than the serializer allows
    #[error("Nesting depth exceeds the limit of {limit}")]
    NestingTooDeep { limit: usize },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error raised through serde
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error at a byte offset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slon::{Error, ErrorCode};
    ///
    /// let err = Error::syntax(7, ErrorCode::Expected(':'));
    /// assert_eq!(err.to_string(), "Expected ':' at position 7");
    /// ```
    #[must_use]
    pub const fn syntax(position: usize, code: ErrorCode) -> Self {
        Error::Syntax { position, code }
    }

    #[must_use]
    pub const fn out_of_memory(position: usize) -> Self {
        Error::OutOfMemory { position }
    }

    pub fn invalid_arguments<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidArguments(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slon::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader and writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Byte offset into the input where the error was detected.
    ///
    /// Errors that are not tied to a location in the text report 0.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Error::Syntax { position, .. } | Error::OutOfMemory { position } => *position,
            _ => 0,
        }
    }

    /// The diagnostic code of a syntax error.
    #[must_use]
    pub const fn code(&self) -> Option<ErrorCode> {
        match self {
            Error::Syntax { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// The diagnostic message without the position suffix.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slon::parse;
    ///
    /// let err = parse("[1 2]").unwrap_err();
    /// assert_eq!(err.message(), "Expected '|' or ']'");
    /// assert_eq!(err.position(), 3);
    /// ```
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Error::Syntax { code, .. } => code.to_string(),
            Error::OutOfMemory { .. } => "Out of memory".to_string(),
            Error::InvalidArguments(_) => "Invalid arguments".to_string(),
            Error::NestingTooDeep { .. } => ErrorCode::NestingTooDeep.to_string(),
            Error::Io(msg) | Error::Custom(msg) => msg.clone(),
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_display() {
        let err = Error::syntax(12, ErrorCode::ExpectedCommaOrParen);
        assert_eq!(err.to_string(), "Expected ',' or ')' at position 12");
        assert_eq!(err.position(), 12);
        assert_eq!(err.message(), "Expected ',' or ')'");
    }

    #[test]
    fn test_unpositioned_errors_report_zero() {
        assert_eq!(Error::custom("x").position(), 0);
        assert_eq!(Error::invalid_arguments("x").position(), 0);
        assert_eq!(Error::NestingTooDeep { limit: 3 }.position(), 0);
    }

    #[test]
    fn test_out_of_memory() {
        let err = Error::out_of_memory(5);
        assert_eq!(err.position(), 5);
        assert_eq!(err.message(), "Out of memory");
        assert_eq!(err.code(), None);
    }

    #[test]
    fn test_expected_char_message() {
        assert_eq!(ErrorCode::Expected('(').to_string(), "Expected '('");
    }
}
