//! # slon
//!
//! A parser and serializer for SLON, a JSON-like text format with
//! parenthesized objects, pipe-delimited arrays, bare words and a first-class
//! date-time literal, plus a Serde bridge for typed data.
//!
//! ## What does SLON look like?
//!
//! ```text
//! (id: 7, name: 'Alice', roles: [admin | ops], since: 2024-03-01/18:22:10.001)
//! ```
//!
//! - Objects are `( key: value, ... )`, arrays are `[ value | value ]`
//! - Strings may be `'single'`, `"double"` or bare words
//! - `YYYY-MM-DD/HH:MM:SS.mmm` is a date-time, not a string
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! slon = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Parsing and Stringifying
//!
//! ```rust
//! use slon::{parse, stringify, Value};
//!
//! let value = parse("(name: Alice, scores: [1 | 2.5])").unwrap();
//! let obj = value.as_object().unwrap();
//! assert_eq!(obj.get("name").and_then(Value::as_str), Some("Alice"));
//!
//! assert_eq!(stringify(&value).unwrap(), "(name: 'Alice', scores: [1 | 2.5])");
//! ```
//!
//! ### Basic Serialization and Deserialization
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use slon::{to_string, from_str};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User {
//!     id: 123,
//!     name: "Alice".to_string(),
//!     active: true,
//! };
//!
//! let text = to_string(&user).unwrap();
//! assert_eq!(text, "(id: 123, name: 'Alice', active: true)");
//!
//! let user_back: User = from_str(&text).unwrap();
//! assert_eq!(user, user_back);
//! ```
//!
//! ### Errors
//!
//! A failed parse reports one diagnostic and the byte offset where parsing
//! stopped:
//!
//! ```rust
//! use slon::parse;
//!
//! let err = parse("(a: )").unwrap_err();
//! assert_eq!(err.to_string(), "Empty string value at position 4");
//! ```
//!
//! ## Limits
//!
//! Numbers are `f64` and are written with 15 significant digits. Objects and
//! arrays may nest at most [`DEFAULT_MAX_DEPTH`](options::DEFAULT_MAX_DEPTH)
//! levels unless [`SlonOptions`] says otherwise.
//!
//! ## Format Reference
//!
//! See the [`format`] module for the grammar and canonical output rules.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - typed round trip through SLON text
//! - **`macro.rs`** - building values with the `slon!` macro
//! - **`dynamic_values.rs`** - inspecting parsed `Value` trees
//!
//! Run any example with: `cargo run --example <name>`

pub mod buffer;
pub mod datetime;
pub mod de;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use buffer::Buffer;
pub use datetime::DateTime;
pub use de::{Parser, ValueDeserializer};
pub use error::{Error, ErrorCode, Result};
pub use map::Map;
pub use options::SlonOptions;
pub use ser::{Serializer, ValueSerializer};
pub use value::Value;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Parses SLON text into a [`Value`] tree.
///
/// # Examples
///
/// ```rust
/// use slon::{parse, Value};
///
/// assert_eq!(parse("[]").unwrap(), Value::Array(vec![]));
/// assert_eq!(parse("'line1\\nline2'").unwrap(), Value::from("line1\nline2"));
/// ```
///
/// # Errors
///
/// Returns a syntax error with the byte offset where parsing stopped, or
/// [`Error::OutOfMemory`] if an allocation failed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(text: &str) -> Result<Value> {
    parse_with_options(text, &SlonOptions::default())
}

/// Parses SLON text with custom options.
///
/// # Errors
///
/// As [`parse`], plus [`ErrorCode::NestingTooDeep`] past `options.max_depth`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options(text: &str, options: &SlonOptions) -> Result<Value> {
    Parser::with_options(text, options).parse()
}

/// Parses SLON text whose root value must be an object.
///
/// # Examples
///
/// ```rust
/// use slon::{parse_object, ErrorCode};
///
/// let map = parse_object("(host: localhost, port: 8080)").unwrap();
/// assert_eq!(map.get("port").and_then(|v| v.as_i64()), Some(8080));
///
/// let err = parse_object("[1]").unwrap_err();
/// assert_eq!(err.code(), Some(ErrorCode::RootNotObject));
/// ```
///
/// # Errors
///
/// As [`parse`], plus [`ErrorCode::RootNotObject`] at the root's offset.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_object(text: &str) -> Result<Map> {
    Parser::new(text).parse_object()
}

/// Renders a [`Value`] tree as canonical SLON text.
///
/// # Examples
///
/// ```rust
/// use slon::{stringify, Map, Value};
///
/// let mut map = Map::new();
/// map.push("a b".to_string(), Value::from("x"));
/// assert_eq!(stringify(&Value::Object(map)).unwrap(), "('a b': 'x')");
/// ```
///
/// # Errors
///
/// Returns [`Error::OutOfMemory`] if the output cannot grow,
/// [`Error::NestingTooDeep`] for trees deeper than the default limit, and
/// [`Error::InvalidArguments`] for non-finite numbers.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn stringify(value: &Value) -> Result<String> {
    stringify_with_options(value, &SlonOptions::default())
}

/// Renders a [`Value`] tree as canonical SLON text with custom options.
///
/// # Errors
///
/// As [`stringify`], with the nesting limit taken from `options`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn stringify_with_options(value: &Value, options: &SlonOptions) -> Result<String> {
    let mut serializer = Serializer::with_options(options);
    serializer.serialize_value(value)?;
    serializer.into_inner()
}

/// Serialize any `T: Serialize` to a SLON string.
///
/// # Examples
///
/// ```rust
/// use slon::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// assert_eq!(to_string(&point).unwrap(), "(x: 1, y: 2)");
/// ```
///
/// # Errors
///
/// Returns an error if the value has no SLON representation (non-string map
/// keys, non-finite floats) or nests too deeply.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    stringify(&to_value(value)?)
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use slon::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: Value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidArguments`] for values SLON cannot hold.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serialize any `T: Serialize` to a writer in SLON format.
///
/// # Examples
///
/// ```rust
/// use slon::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &vec!["a", "b"]).unwrap();
/// assert_eq!(buffer, b"['a' | 'b']");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string(value)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserialize an instance of type `T` from a string of SLON text.
///
/// # Examples
///
/// ```rust
/// use slon::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("(x: 1, y: 2)").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns a positioned syntax error if the text is not valid SLON, or a
/// custom error if the value does not fit type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(parse(s)?)
}

/// Deserialize an instance of type `T` from a [`Value`].
///
/// # Examples
///
/// ```rust
/// use slon::{from_value, slon};
///
/// let numbers: Vec<u8> = from_value(slon!([1, 2, 3])).unwrap();
/// assert_eq!(numbers, vec![1, 2, 3]);
/// ```
///
/// # Errors
///
/// Returns an error if the value does not fit type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(ValueDeserializer::new(value))
}

/// Deserialize an instance of type `T` from an I/O stream of SLON.
///
/// # Examples
///
/// ```rust
/// use slon::from_reader;
/// use serde::Deserialize;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let cursor = Cursor::new(b"(x: 1, y: 2)");
/// let point: Point = from_reader(cursor).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not UTF-8 or not valid
/// SLON, or the data does not fit type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_slice(&bytes)
}

/// Deserialize an instance of type `T` from bytes of SLON text.
///
/// # Examples
///
/// ```rust
/// use slon::{from_slice, ErrorCode};
///
/// let tags: Vec<String> = from_slice(b"[a | b]").unwrap();
/// assert_eq!(tags, vec!["a", "b"]);
///
/// let err = from_slice::<Vec<String>>(b"[a | \xff]").unwrap_err();
/// assert_eq!(err.code(), Some(ErrorCode::InvalidUtf8));
/// assert_eq!(err.position(), 5);
/// ```
///
/// # Errors
///
/// Returns [`ErrorCode::InvalidUtf8`] at the first invalid byte, otherwise as
/// [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v)
        .map_err(|e| Error::syntax(e.valid_up_to(), ErrorCode::InvalidUtf8))?;
    from_str(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    #[test]
    fn test_serialize_deserialize_point() {
        let point = Point { x: 1, y: 2 };
        let text = to_string(&point).unwrap();
        let point_back: Point = from_str(&text).unwrap();
        assert_eq!(point, point_back);
    }

    #[test]
    fn test_serialize_deserialize_user() {
        let user = User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        };

        let text = to_string(&user).unwrap();
        assert_eq!(
            text,
            "(id: 123, name: 'Alice', active: true, tags: ['admin' | 'user'])"
        );
        let user_back: User = from_str(&text).unwrap();
        assert_eq!(user, user_back);
    }

    #[test]
    fn test_to_value() {
        let point = Point { x: 1, y: 2 };
        let value = to_value(&point).unwrap();

        match value {
            Value::Object(obj) => {
                assert_eq!(obj.get("x"), Some(&Value::Number(1.0)));
                assert_eq!(obj.get("y"), Some(&Value::Number(2.0)));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_arrays() {
        let numbers = vec![1, 2, 3, 4, 5];
        let text = to_string(&numbers).unwrap();
        assert_eq!(text, "[1 | 2 | 3 | 4 | 5]");
        let numbers_back: Vec<i32> = from_str(&text).unwrap();
        assert_eq!(numbers, numbers_back);
    }

    #[test]
    fn test_bare_words_deserialize_as_strings() {
        let user: User = from_str("(id: 1, name: Bob, active: false, tags: [x | y])").unwrap();
        assert_eq!(user.name, "Bob");
        assert_eq!(user.tags, vec!["x", "y"]);
    }

    #[test]
    fn test_parse_object_trailing_content() {
        let err = parse_object("(a: 1) x").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::TrailingContent));
        assert_eq!(err.position(), 7);
    }

    #[test]
    fn test_stringify_with_options_depth() {
        let value = parse("[[[1]]]").unwrap();
        let options = SlonOptions::new().with_max_depth(2);
        assert_eq!(
            stringify_with_options(&value, &options),
            Err(Error::NestingTooDeep { limit: 2 })
        );
        assert_eq!(stringify(&value).unwrap(), "[[[1]]]");
    }

    #[test]
    fn test_type_mismatch_is_custom_error() {
        let err = from_str::<Point>("(x: 1.5, y: 2)").unwrap_err();
        assert!(matches!(err, Error::Custom(_)));
    }
}
