//! SLON Format Reference
//!
//! This module documents the SLON text format as implemented by this library.
//! It contains no code.
//!
//! # Overview
//!
//! SLON is a JSON-like interchange format with parenthesized objects,
//! pipe-delimited arrays, bare words, and a first-class date-time literal.
//!
//! ```text
//! (name: Alice, tags: [admin | 'on call'], joined: 2024-03-01/18:22:10.001)
//! ```
//!
//! # Grammar
//!
//! ```text
//! value          := object | array | quotedString | datetime | number | keyword | unquotedString
//! object         := '(' ws (pair (',' pair)*)? ws ')'
//! pair           := (quotedString | unquotedString) ws ':' value
//! array          := '[' ws (value ('|' value)*)? ws ']'
//! keyword        := 'true' | 'false' | 'null'
//! quotedString   := "'" chars "'" | '"' chars '"'
//! datetime       := DDDD '-' DD '-' DD '/' DD ':' DD ':' DD '.' DDD
//! number         := decimal floating-point literal
//! unquotedString := run of bytes that are neither delimiters nor whitespace
//! ```
//!
//! **Delimiters** are `: , ( ) [ ] |`. **Whitespace** is space, tab, line
//! feed, vertical tab, form feed and carriage return. It may appear between
//! any two tokens and is never significant outside quotes.
//!
//! # Boundaries
//!
//! Keywords, numbers and date-times must be followed by end of input,
//! whitespace or a delimiter. Without a boundary a keyword is just the start
//! of a bare word, while a number is an error:
//!
//! ```rust
//! use slon::{parse, ErrorCode, Value};
//!
//! assert_eq!(parse("nullish").unwrap(), Value::from("nullish"));
//! assert_eq!(
//!     parse("12px").unwrap_err().code(),
//!     Some(ErrorCode::InvalidNumberBoundary)
//! );
//! ```
//!
//! # Objects
//!
//! Keys are strings, quoted or bare; `(1: x)` has the key `"1"`. Entries keep
//! their source order and duplicate keys are kept as separate entries.
//!
//! ```rust
//! use slon::parse;
//!
//! let value = parse("(a: 1, a: 2)").unwrap();
//! assert_eq!(value.as_object().unwrap().len(), 2);
//! ```
//!
//! # Strings
//!
//! | Escape | Meaning |
//! |--------|---------|
//! | `\\` `\'` `\"` `\/` | the character itself |
//! | `\b` `\f` `\n` `\r` `\t` | backspace, form feed, line feed, carriage return, tab |
//! | `\uXXXX` | the code point `XXXX` (four hex digits, no surrogates) |
//!
//! A bare word ends at the first delimiter or whitespace byte, so
//! `(greeting: hello world)` is an error: `world` is where `,` or `)` should be.
//!
//! # Numbers
//!
//! Numbers are IEEE-754 doubles: optional `-`, digits, optional fraction,
//! optional exponent. Infinities and NaN are rejected. Output uses 15
//! significant digits, so doubles that need 16 or 17 digits to round-trip
//! come back slightly different.
//!
//! ```rust
//! use slon::{parse, stringify};
//!
//! let value = parse("0.1").unwrap();
//! assert_eq!(stringify(&value).unwrap(), "0.1");
//! assert_eq!(stringify(&parse("1e21").unwrap()).unwrap(), "1e+21");
//! ```
//!
//! # Date-times
//!
//! A date-time is exactly 23 characters. Fields are read as written; no
//! calendar check is made.
//!
//! ```rust
//! use slon::{parse, DateTime, Value};
//!
//! assert_eq!(
//!     parse("2024-13-40/99:99:99.999").unwrap(),
//!     Value::DateTime(DateTime::new(2024, 13, 40, 99, 99, 99, 999))
//! );
//! ```
//!
//! A token starting with a digit that is not a complete date-time is read as
//! a number, so `2024-01-02` is an error rather than a string.
//!
//! # Canonical Output
//!
//! [`stringify`](crate::stringify) always produces the same spelling:
//! single-quoted strings, `, ` between object entries, ` | ` between array
//! items, and bare keys unless a key is empty or contains a delimiter, a
//! quote or whitespace. Only `\\ \' \n \r \t` are escaped; other control
//! characters are written raw, which still parses back to the same string.
//!
//! ```rust
//! use slon::{parse, stringify};
//!
//! let value = parse("( \"a b\" : \"x\" , c:[1|2] )").unwrap();
//! assert_eq!(stringify(&value).unwrap(), "('a b': 'x', c: [1 | 2])");
//! ```
