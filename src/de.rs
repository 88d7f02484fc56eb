//! SLON parsing and deserialization.
//!
//! This module provides the [`Parser`], a single-pass recursive-descent
//! scanner that turns SLON text into a [`Value`] tree, and the bridge that
//! lets any `Deserialize` type be read out of such a tree.
//!
//! ## Overview
//!
//! - **Fail-fast**: the first error aborts the whole parse; no partial tree
//!   is ever returned
//! - **Positioned errors**: every syntax error carries the byte offset at
//!   which the parser stopped
//! - **Bounded nesting**: objects and arrays deeper than
//!   [`SlonOptions::max_depth`] are rejected instead of exhausting the stack
//!
//! ## Token dispatch
//!
//! At each value position the first byte decides what is tried:
//!
//! 1. `(` object, `[` array
//! 2. `'` or `"` quoted string
//! 3. `-` or a digit: a date-time literal, and failing that a number
//! 4. `true`, `false`, `null` when followed by a boundary
//! 5. anything else is an unquoted string
//!
//! ```rust
//! use slon::{parse, Value};
//!
//! assert_eq!(parse("truefoo").unwrap(), Value::from("truefoo"));
//! assert_eq!(parse("true").unwrap(), Value::Bool(true));
//! ```
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use slon::from_str;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Data { x: i32, y: i32 }
//!
//! let data: Data = from_str("(x: 1, y: 2)").unwrap();
//! assert_eq!(data, Data { x: 1, y: 2 });
//! ```

use crate::buffer::Buffer;
use crate::datetime::DATETIME_TOKEN;
use crate::value::{f64_to_i64, VALUE_TOKEN};
use crate::{DateTime, Error, ErrorCode, Map, Result, SlonOptions, Value};
use serde::de::IntoDeserializer;
use serde::{de, forward_to_deserialize_any};

/// Recursive-descent SLON parser over text held fully in memory.
///
/// # Examples
///
/// ```rust
/// use slon::{Parser, SlonOptions, Value};
///
/// let value = Parser::new("[1 | 2 | 3]").parse().unwrap();
/// assert_eq!(value.as_array().map(Vec::len), Some(3));
///
/// let options = SlonOptions::new().with_max_depth(0);
/// assert!(Parser::with_options("[]", &options).parse().is_err());
/// ```
pub struct Parser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, &SlonOptions::default())
    }

    pub fn with_options(input: &'a str, options: &SlonOptions) -> Self {
        Parser {
            input,
            bytes: input.as_bytes(),
            pos: 0,
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    /// Parses the whole input as exactly one value.
    pub fn parse(mut self) -> Result<Value> {
        let value = self.parse_value()?;
        self.finish()?;
        Ok(value)
    }

    /// Parses the whole input, requiring the root value to be an object.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slon::{ErrorCode, Parser};
    ///
    /// assert!(Parser::new("(a: 1)").parse_object().is_ok());
    ///
    /// let err = Parser::new("  [1]").parse_object().unwrap_err();
    /// assert_eq!(err.code(), Some(ErrorCode::RootNotObject));
    /// assert_eq!(err.position(), 2);
    /// ```
    pub fn parse_object(mut self) -> Result<Map> {
        self.skip_whitespace();
        let root = self.pos;
        let value = self.parse_value()?;
        self.finish()?;
        match value {
            Value::Object(map) => Ok(map),
            _ => Err(Error::syntax(root, ErrorCode::RootNotObject)),
        }
    }

    fn finish(&mut self) -> Result<()> {
        self.skip_whitespace();
        if self.pos != self.bytes.len() {
            return Err(self.error(ErrorCode::TrailingContent));
        }
        Ok(())
    }

    #[inline]
    fn error(&self, code: ErrorCode) -> Error {
        Error::syntax(self.pos, code)
    }

    #[inline]
    fn out_of_memory(&self) -> Error {
        Error::out_of_memory(self.pos)
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_space) {
            self.pos += 1;
        }
    }

    /// Consumes `expected` if it is the next byte.
    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: u8) -> Result<()> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.error(ErrorCode::Expected(char::from(expected))))
        }
    }

    /// End of input, whitespace and delimiters all end a token.
    fn is_boundary(&self, index: usize) -> bool {
        match self.bytes.get(index) {
            None => true,
            Some(&b) => is_delimiter(b) || is_space(b),
        }
    }

    fn enter_nested(&mut self) -> Result<()> {
        if self.depth >= self.max_depth {
            return Err(self.error(ErrorCode::NestingTooDeep));
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_value(&mut self) -> Result<Value> {
        self.skip_whitespace();
        let Some(first) = self.peek() else {
            return Err(self.error(ErrorCode::UnexpectedEof));
        };

        match first {
            b'(' => self.parse_object_body(),
            b'[' => self.parse_array(),
            b'\'' | b'"' => self.parse_quoted_string().map(Value::String),
            b'-' | b'0'..=b'9' => match self.parse_datetime() {
                Some(dt) => Ok(Value::DateTime(dt)),
                None => self.parse_number().map(Value::Number),
            },
            _ => match self.parse_keyword() {
                Some(keyword) => Ok(keyword),
                None => self.parse_unquoted_string().map(Value::String),
            },
        }
    }

    fn parse_object_body(&mut self) -> Result<Value> {
        self.enter_nested()?;
        self.expect(b'(')?;
        let mut map = Map::new();

        self.skip_whitespace();
        if !self.eat(b')') {
            loop {
                let key = self.parse_key()?;
                self.skip_whitespace();
                self.expect(b':')?;
                let value = self.parse_value()?;
                map.try_push(key, value)
                    .map_err(|_| self.out_of_memory())?;

                self.skip_whitespace();
                if self.eat(b',') {
                    continue;
                }
                if self.eat(b')') {
                    break;
                }
                return Err(self.error(ErrorCode::ExpectedCommaOrParen));
            }
        }

        self.depth -= 1;
        Ok(Value::Object(map))
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.enter_nested()?;
        self.expect(b'[')?;
        let mut items = Vec::new();

        self.skip_whitespace();
        if !self.eat(b']') {
            loop {
                let value = self.parse_value()?;
                items.try_reserve(1).map_err(|_| self.out_of_memory())?;
                items.push(value);

                self.skip_whitespace();
                if self.eat(b'|') {
                    continue;
                }
                if self.eat(b']') {
                    break;
                }
                return Err(self.error(ErrorCode::ExpectedPipeOrBracket));
            }
        }

        self.depth -= 1;
        Ok(Value::Array(items))
    }

    /// Object keys are strings only, never numbers or keywords.
    fn parse_key(&mut self) -> Result<String> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(self.error(ErrorCode::UnexpectedEof)),
            Some(b'\'' | b'"') => self.parse_quoted_string(),
            Some(_) => self.parse_unquoted_string(),
        }
    }

    fn parse_keyword(&mut self) -> Option<Value> {
        let rest = &self.bytes[self.pos..];
        for (word, value) in [
            ("true", Value::Bool(true)),
            ("false", Value::Bool(false)),
            ("null", Value::Null),
        ] {
            if rest.starts_with(word.as_bytes()) && self.is_boundary(self.pos + word.len()) {
                self.pos += word.len();
                return Some(value);
            }
        }
        None
    }

    fn parse_datetime(&mut self) -> Option<DateTime> {
        let dt = DateTime::match_prefix(&self.bytes[self.pos..])?;
        let end = self.pos + crate::datetime::DATETIME_LEN;
        if !self.is_boundary(end) {
            return None;
        }
        self.pos = end;
        Some(dt)
    }

    fn parse_number(&mut self) -> Result<f64> {
        let start = self.pos;
        let Some(token) = scan_number(&self.bytes[start..]) else {
            return Err(self.error(ErrorCode::InvalidNumber));
        };
        let end = start + token.len;
        if !self.is_boundary(end) {
            return Err(self.error(ErrorCode::InvalidNumberBoundary));
        }

        self.pos = end;
        if token.special {
            return Err(self.error(ErrorCode::NonFiniteNumber));
        }
        let number: f64 = self.input[start..end]
            .parse()
            .map_err(|_| Error::syntax(start, ErrorCode::InvalidNumber))?;
        if !number.is_finite() {
            return Err(self.error(ErrorCode::NonFiniteNumber));
        }
        Ok(number)
    }

    fn parse_unquoted_string(&mut self) -> Result<String> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|b| !is_delimiter(b) && !is_space(b))
        {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(self.error(ErrorCode::EmptyString));
        }

        // Delimiters and whitespace are ASCII, so the run ends on a char boundary.
        let text = &self.input[start..self.pos];
        let mut owned = String::new();
        owned
            .try_reserve_exact(text.len())
            .map_err(|_| self.out_of_memory())?;
        owned.push_str(text);
        Ok(owned)
    }

    fn parse_quoted_string(&mut self) -> Result<String> {
        let Some(quote) = self.peek() else {
            return Err(self.error(ErrorCode::UnexpectedEof));
        };
        self.pos += 1;

        let mut buffer = Buffer::new();
        let mut run_start = self.pos;
        while let Some(b) = self.peek() {
            if b == quote {
                self.flush_run(&mut buffer, run_start)?;
                self.pos += 1;
                return buffer
                    .into_string()
                    .map_err(|_| self.error(ErrorCode::InvalidUtf8));
            }
            if b != b'\\' {
                self.pos += 1;
                continue;
            }

            self.flush_run(&mut buffer, run_start)?;
            self.pos += 1;
            let Some(escape) = self.peek() else {
                return Err(self.error(ErrorCode::InvalidEscape));
            };
            self.pos += 1;

            let pushed = match escape {
                b'"' | b'\'' | b'\\' | b'/' => buffer.push(escape),
                b'b' => buffer.push(0x08),
                b'f' => buffer.push(0x0C),
                b'n' => buffer.push(b'\n'),
                b'r' => buffer.push(b'\r'),
                b't' => buffer.push(b'\t'),
                b'u' => {
                    let ch = self.parse_unicode_escape()?;
                    buffer.push_char(ch)
                }
                _ => return Err(self.error(ErrorCode::UnknownEscape)),
            };
            pushed.map_err(|_| self.out_of_memory())?;
            run_start = self.pos;
        }

        Err(self.error(ErrorCode::UnterminatedString))
    }

    /// Copies the unescaped bytes `run_start..pos` into `buffer`.
    fn flush_run(&self, buffer: &mut Buffer, run_start: usize) -> Result<()> {
        buffer
            .extend_from_slice(&self.bytes[run_start..self.pos])
            .map_err(|_| self.out_of_memory())
    }

    /// Reads the four hex digits after `\u`. The cursor only moves on success.
    fn parse_unicode_escape(&mut self) -> Result<char> {
        let digits = self
            .bytes
            .get(self.pos..self.pos + 4)
            .ok_or_else(|| self.error(ErrorCode::InvalidUnicodeEscape))?;
        let code = digits
            .iter()
            .try_fold(0u32, |acc, &b| {
                char::from(b).to_digit(16).map(|digit| (acc << 4) | digit)
            })
            .ok_or_else(|| self.error(ErrorCode::InvalidUnicodeEscape))?;
        // Surrogate halves have no UTF-8 encoding.
        let ch =
            char::from_u32(code).ok_or_else(|| self.error(ErrorCode::InvalidUnicodeEscape))?;
        self.pos += 4;
        Ok(ch)
    }
}

#[inline]
pub(crate) const fn is_delimiter(b: u8) -> bool {
    matches!(b, b':' | b',' | b'(' | b')' | b'[' | b']' | b'|')
}

/// C `isspace`: includes vertical tab, unlike `u8::is_ascii_whitespace`.
#[inline]
pub(crate) const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

struct NumberToken {
    len: usize,
    /// `inf`, `infinity` or `nan`.
    special: bool,
}

/// Measures the longest floating-point literal at the start of `bytes`.
///
/// Accepts an optional sign, then either `inf`/`infinity`/`nan(...)` in any
/// case, or digits with an optional fraction and an exponent that is only
/// taken when it has at least one digit. Returns `None` if no digit was seen.
fn scan_number(bytes: &[u8]) -> Option<NumberToken> {
    let at = |i: usize| bytes.get(i).copied();
    let mut i = 0;
    if matches!(at(i), Some(b'+' | b'-')) {
        i += 1;
    }

    let rest = &bytes[i..];
    let starts_with = |word: &[u8]| {
        rest.len() >= word.len() && rest[..word.len()].eq_ignore_ascii_case(word)
    };
    if starts_with(b"infinity") {
        return Some(NumberToken { len: i + 8, special: true });
    }
    if starts_with(b"inf") {
        return Some(NumberToken { len: i + 3, special: true });
    }
    if starts_with(b"nan") {
        i += 3;
        if at(i) == Some(b'(') {
            let mut j = i + 1;
            while at(j).is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_') {
                j += 1;
            }
            if at(j) == Some(b')') {
                i = j + 1;
            }
        }
        return Some(NumberToken { len: i, special: true });
    }

    let mut digits = 0;
    while at(i).is_some_and(|b| b.is_ascii_digit()) {
        i += 1;
        digits += 1;
    }
    if at(i) == Some(b'.') {
        i += 1;
        while at(i).is_some_and(|b| b.is_ascii_digit()) {
            i += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(at(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(at(j), Some(b'+' | b'-')) {
            j += 1;
        }
        if at(j).is_some_and(|b| b.is_ascii_digit()) {
            while at(j).is_some_and(|b| b.is_ascii_digit()) {
                j += 1;
            }
            i = j;
        }
    }

    Some(NumberToken { len: i, special: false })
}

/// Deserializes any `Deserialize` type out of an owned [`Value`].
///
/// Date-times are presented as their canonical string, except to [`Value`]
/// itself, which gets the variant back. Whole numbers within
/// `i64` range are presented as integers so that integer fields accept them.
pub struct ValueDeserializer {
    value: Value,
}

impl ValueDeserializer {
    pub fn new(value: Value) -> Self {
        ValueDeserializer { value }
    }
}

impl<'de> IntoDeserializer<'de, Error> for Value {
    type Deserializer = ValueDeserializer;

    fn into_deserializer(self) -> ValueDeserializer {
        ValueDeserializer::new(self)
    }
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Number(n) => match f64_to_i64(n) {
                Some(i) => visitor.visit_i64(i),
                None => visitor.visit_f64(n),
            },
            Value::String(s) => visitor.visit_string(s),
            Value::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            Value::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
            Value::DateTime(dt) => visitor.visit_string(dt.to_string()),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_newtype_struct<V>(self, name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::DateTime(dt) if name == VALUE_TOKEN => {
                let entry = std::iter::once((DATETIME_TOKEN, dt.to_string()));
                visitor.visit_map(de::value::MapDeserializer::<_, Error>::new(entry))
            }
            value => visitor.visit_newtype_struct(ValueDeserializer::new(value)),
        }
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::String(s) => visitor.visit_enum(s.into_deserializer()),
            Value::Object(obj) => {
                let mut entries = obj.into_iter();
                match (entries.next(), entries.next()) {
                    (Some((variant, value)), None) => {
                        visitor.visit_enum(EnumDeserializer::new(variant, value))
                    }
                    _ => Err(Error::custom(
                        "Expected an object with exactly one entry for an enum variant",
                    )),
                }
            }
            _ => Err(Error::custom("Expected enum")),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl SeqDeserializer {
    fn new(vec: Vec<Value>) -> Self {
        SeqDeserializer {
            iter: vec.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct MapDeserializer {
    iter: std::vec::IntoIter<(String, Value)>,
    value: Option<Value>,
}

impl MapDeserializer {
    fn new(map: Map) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(ValueDeserializer::new(Value::String(key)))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct EnumDeserializer {
    variant: String,
    value: Value,
}

impl EnumDeserializer {
    fn new(variant: String, value: Value) -> Self {
        EnumDeserializer { variant, value }
    }
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(ValueDeserializer::new(Value::String(self.variant)))?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Value,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            Value::Null => Ok(()),
            _ => Err(Error::custom("Expected unit variant")),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(ValueDeserializer::new(self.value))
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            _ => Err(Error::custom("Expected tuple variant")),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
            _ => Err(Error::custom("Expected struct variant")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Value> {
        Parser::new(input).parse()
    }

    fn fails_with(input: &str, code: ErrorCode, position: usize) {
        let err = parse(input).unwrap_err();
        assert_eq!(
            (err.code(), err.position()),
            (Some(code), position),
            "input {:?} gave {}",
            input,
            err
        );
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(parse("()").unwrap(), Value::Object(Map::new()));
        assert_eq!(parse("[]").unwrap(), Value::Array(vec![]));
        assert_eq!(parse(" (  ) ").unwrap(), Value::Object(Map::new()));
        assert_eq!(parse("[ ]").unwrap(), Value::Array(vec![]));
    }

    #[test]
    fn test_array_in_order() {
        let value = parse("[1|2|3]").unwrap();
        assert_eq!(
            value,
            Value::Array(vec![
                Value::Number(1.0),
                Value::Number(2.0),
                Value::Number(3.0)
            ])
        );
    }

    #[test]
    fn test_duplicate_keys_preserved() {
        let value = parse("(a: 1, a: 2)").unwrap();
        let map = value.as_object().unwrap();
        let entries: Vec<_> = map.iter().map(|(k, v)| (k.as_str(), v.clone())).collect();
        assert_eq!(
            entries,
            vec![("a", Value::Number(1.0)), ("a", Value::Number(2.0))]
        );
    }

    #[test]
    fn test_keyword_boundary() {
        assert_eq!(parse("truefoo").unwrap(), Value::from("truefoo"));
        assert_eq!(parse("nullable").unwrap(), Value::from("nullable"));
        assert_eq!(parse("false").unwrap(), Value::Bool(false));
        assert_eq!(parse("null").unwrap(), Value::Null);
        assert_eq!(
            parse("[true|null]").unwrap(),
            Value::Array(vec![Value::Bool(true), Value::Null])
        );
    }

    #[test]
    fn test_datetime() {
        assert_eq!(
            parse("2024-01-02/03:04:05.006").unwrap(),
            Value::DateTime(DateTime::new(2024, 1, 2, 3, 4, 5, 6))
        );
        assert_eq!(
            parse("2024-13-40/99:99:99.999").unwrap(),
            Value::DateTime(DateTime::new(2024, 13, 40, 99, 99, 99, 999))
        );
        assert_eq!(
            parse("(at: 2024-03-01/18:22:10.001)").unwrap(),
            Value::Object(Map::from(vec![(
                "at".to_string(),
                Value::DateTime(DateTime::new(2024, 3, 1, 18, 22, 10, 1))
            )]))
        );
    }

    #[test]
    fn test_datetime_without_boundary_falls_back_to_number() {
        fails_with("2024-01-02/03:04:05.006x", ErrorCode::InvalidNumberBoundary, 0);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(parse("-12.5").unwrap(), Value::Number(-12.5));
        assert_eq!(parse("1e3").unwrap(), Value::Number(1000.0));
        assert_eq!(parse("1.").unwrap(), Value::Number(1.0));
        assert_eq!(parse("-.5").unwrap(), Value::Number(-0.5));
        assert_eq!(parse("2E-2").unwrap(), Value::Number(0.02));
    }

    #[test]
    fn test_exponent_without_digits_is_not_consumed() {
        fails_with("1e", ErrorCode::InvalidNumberBoundary, 0);
        fails_with("[1e+ ]", ErrorCode::InvalidNumberBoundary, 1);
    }

    #[test]
    fn test_number_errors() {
        fails_with("1.2.3", ErrorCode::InvalidNumberBoundary, 0);
        fails_with("[1 | 12abc]", ErrorCode::InvalidNumberBoundary, 5);
        fails_with("-", ErrorCode::InvalidNumber, 0);
        fails_with("-abc", ErrorCode::InvalidNumber, 0);
        fails_with("1e999", ErrorCode::NonFiniteNumber, 5);
        fails_with("-inf", ErrorCode::NonFiniteNumber, 4);
        fails_with("-Infinity ", ErrorCode::NonFiniteNumber, 9);
        fails_with("[-nan]", ErrorCode::NonFiniteNumber, 5);
    }

    #[test]
    fn test_quoted_strings() {
        assert_eq!(parse("'it''s'").unwrap_err().code(), Some(ErrorCode::TrailingContent));
        assert_eq!(parse(r#""say \"hi\"""#).unwrap(), Value::from("say \"hi\""));
        assert_eq!(parse(r"'a\/b'").unwrap(), Value::from("a/b"));
        assert_eq!(parse(r"'\b\f\t\r'").unwrap(), Value::from("\u{8}\u{c}\t\r"));
        assert_eq!(parse("'line1\\nline2'").unwrap(), Value::from("line1\nline2"));
        assert_eq!(parse("'  padded '").unwrap(), Value::from("  padded "));
        assert_eq!(parse("'héllo'").unwrap(), Value::from("héllo"));
    }

    #[test]
    fn test_unicode_escapes() {
        assert_eq!(parse(r"'\u0041'").unwrap(), Value::from("A"));
        assert_eq!(parse(r"'\u00e9'").unwrap(), Value::from("é"));
        assert_eq!(parse(r"'\u20AC'").unwrap(), Value::from("€"));
        assert_eq!(parse(r"'a\u0000b'").unwrap(), Value::from("a\0b"));
    }

    #[test]
    fn test_string_errors() {
        fails_with("'abc", ErrorCode::UnterminatedString, 4);
        fails_with("'abc\\", ErrorCode::InvalidEscape, 5);
        fails_with("'\\x'", ErrorCode::UnknownEscape, 3);
        fails_with("'\\u12'", ErrorCode::InvalidUnicodeEscape, 3);
        fails_with("'\\u12G4'", ErrorCode::InvalidUnicodeEscape, 3);
        fails_with("'\\uD800'", ErrorCode::InvalidUnicodeEscape, 3);
    }

    #[test]
    fn test_unquoted_strings() {
        assert_eq!(parse("  hello  ").unwrap(), Value::from("hello"));
        assert_eq!(
            parse("(name: Alice)").unwrap(),
            Value::Object(Map::from(vec![("name".to_string(), Value::from("Alice"))]))
        );
        assert_eq!(parse("café").unwrap(), Value::from("café"));
    }

    #[test]
    fn test_structural_errors() {
        fails_with("(a: )", ErrorCode::EmptyString, 4);
        fails_with("(a: 1,)", ErrorCode::EmptyString, 6);
        fails_with("(a 1)", ErrorCode::Expected(':'), 3);
        fails_with("(a: 1 b: 2)", ErrorCode::ExpectedCommaOrParen, 6);
        fails_with("[1 2]", ErrorCode::ExpectedPipeOrBracket, 3);
        fails_with("[1 |", ErrorCode::UnexpectedEof, 4);
        fails_with("(a: 1", ErrorCode::ExpectedCommaOrParen, 5);
        fails_with("(", ErrorCode::UnexpectedEof, 1);
        fails_with("", ErrorCode::UnexpectedEof, 0);
        fails_with("   ", ErrorCode::UnexpectedEof, 3);
        fails_with("1 2", ErrorCode::TrailingContent, 2);
        fails_with(")", ErrorCode::EmptyString, 0);
    }

    #[test]
    fn test_vertical_tab_is_whitespace() {
        assert_eq!(parse("\x0b[1]\x0c").unwrap(), Value::Array(vec![Value::Number(1.0)]));
    }

    #[test]
    fn test_nesting_limit() {
        let options = SlonOptions::new().with_max_depth(3);
        assert!(Parser::with_options("[(k: [1])]", &options).parse().is_ok());

        let err = Parser::with_options("[(k: [[1]])]", &options)
            .parse()
            .unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::NestingTooDeep));
        assert_eq!(err.position(), 6);
    }

    #[test]
    fn test_value_keeps_datetime_through_deserializer() {
        use serde::Deserialize;

        let tree = parse("(at: 2024-01-02/03:04:05.006, log: [1999-12-31/23:59:59.999])").unwrap();
        let back = Value::deserialize(ValueDeserializer::new(tree.clone())).unwrap();
        assert_eq!(back, tree);

        let at = tree.as_object().unwrap().get("at").unwrap().clone();
        let text = String::deserialize(ValueDeserializer::new(at)).unwrap();
        assert_eq!(text, "2024-01-02/03:04:05.006");
    }

    #[test]
    fn test_depth_resets_between_siblings() {
        let options = SlonOptions::new().with_max_depth(2);
        assert!(Parser::with_options("[[1] | [2] | [3]]", &options).parse().is_ok());
    }

    #[test]
    fn test_default_limit_rejects_deep_input() {
        let deep = "[".repeat(10_000);
        let err = parse(&deep).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::NestingTooDeep));
        assert_eq!(err.position(), crate::options::DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_scan_number() {
        let len = |s: &str| scan_number(s.as_bytes()).map(|t| t.len);
        assert_eq!(len("123abc"), Some(3));
        assert_eq!(len("1.5e10,"), Some(6));
        assert_eq!(len("1e+"), Some(1));
        assert_eq!(len("nan(abc)x"), Some(8));
        assert_eq!(len("."), None);
        assert_eq!(len("-"), None);
    }
}
