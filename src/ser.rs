//! SLON serialization.
//!
//! This module provides the [`Serializer`], which renders a [`Value`] tree as
//! canonical SLON text, and the [`ValueSerializer`], which turns any
//! `Serialize` type into a [`Value`] tree.
//!
//! ## Canonical form
//!
//! The output never depends on how the input was spelled:
//!
//! - **Strings** are always single-quoted; only `\\`, `\'`, `\n`, `\r` and
//!   `\t` are escaped and other control bytes are written as-is
//! - **Numbers** use 15 significant digits, like C's `%.15g`
//! - **Arrays** separate items with ` | `, **objects** entries with `, `
//! - **Keys** stay bare unless they are empty or contain a delimiter, a quote
//!   or whitespace
//!
//! ```rust
//! use slon::{parse, stringify};
//!
//! let value = parse("[ \"x\" |  0.1 | (\"a b\": y) ]").unwrap();
//! assert_eq!(stringify(&value).unwrap(), "['x' | 0.1 | ('a b': 'y')]");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use slon::{Serializer, Value};
//!
//! let mut serializer = Serializer::new();
//! serializer.serialize_value(&Value::from(vec![Value::from(1), Value::Null])).unwrap();
//! assert_eq!(serializer.into_inner().unwrap(), "[1 | null]");
//! ```

use crate::buffer::Buffer;
use crate::datetime::DATETIME_TOKEN;
use crate::de::{is_delimiter, is_space};
use crate::{DateTime, Error, ErrorCode, Map, Result, SlonOptions, Value};
use serde::{ser, Serialize};
use std::fmt::{self, Write as _};

/// Writes [`Value`] trees as canonical SLON text.
pub struct Serializer {
    output: Buffer,
    depth: usize,
    max_depth: usize,
    // Writes unrepresentable scalars in a readable form instead of failing.
    lenient: bool,
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Serializer {
    pub fn new() -> Self {
        Self::with_options(&SlonOptions::default())
    }

    pub fn with_options(options: &SlonOptions) -> Self {
        Serializer {
            output: Buffer::new(),
            depth: 0,
            max_depth: options.max_depth,
            lenient: false,
        }
    }

    /// Serializer behind `Value`'s `Display`: no depth limit, and non-finite
    /// numbers or over-wide date-time fields are printed rather than rejected.
    pub(crate) fn for_display() -> Self {
        Serializer {
            lenient: true,
            ..Self::with_options(&SlonOptions::unlimited())
        }
    }

    /// Returns the text written so far.
    pub fn into_inner(self) -> Result<String> {
        self.output.into_string().map_err(|e| {
            Error::syntax(e.utf8_error().valid_up_to(), ErrorCode::InvalidUtf8)
        })
    }

    /// Appends the canonical text of `value`.
    ///
    /// Fails on allocation failure, on trees nested deeper than the configured
    /// limit, on non-finite numbers, and on date-times whose fields overflow
    /// the literal template. None of those has a SLON spelling.
    pub fn serialize_value(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Null => self.write_str("null"),
            Value::Bool(b) => self.write_str(if *b { "true" } else { "false" }),
            Value::Number(n) if n.is_finite() => {
                let text = format_number(*n).map_err(|_| self.format_overflow())?;
                self.write_str(text.as_str())
            }
            Value::Number(n) if self.lenient => self.write_inline(format_args!("{}", n)),
            Value::Number(n) => Err(Error::invalid_arguments(format!(
                "{} cannot be written as a SLON number",
                n
            ))),
            Value::String(s) => self.write_quoted(s),
            Value::Array(items) => {
                self.enter_nested()?;
                self.write_byte(b'[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.write_str(" | ")?;
                    }
                    self.serialize_value(item)?;
                }
                self.write_byte(b']')?;
                self.depth -= 1;
                Ok(())
            }
            Value::Object(map) => {
                self.enter_nested()?;
                self.write_byte(b'(')?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        self.write_str(", ")?;
                    }
                    self.write_key(key)?;
                    self.write_str(": ")?;
                    self.serialize_value(item)?;
                }
                self.write_byte(b')')?;
                self.depth -= 1;
                Ok(())
            }
            Value::DateTime(dt) => match dt.to_literal() {
                Some(literal) => self.write_bytes(&literal),
                None if self.lenient => self.write_inline(format_args!("{}", dt)),
                None => Err(Error::invalid_arguments(format!(
                    "{:?} does not fit the SLON date-time literal",
                    dt
                ))),
            },
        }
    }

    fn write_inline(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        let mut text = InlineText::new();
        text.write_fmt(args).map_err(|_| self.format_overflow())?;
        self.write_str(text.as_str())
    }

    fn format_overflow(&self) -> Error {
        Error::custom(format!(
            "scalar text exceeded {} bytes at position {}",
            INLINE_CAPACITY,
            self.output.len()
        ))
    }

    fn enter_nested(&mut self) -> Result<()> {
        if self.depth >= self.max_depth {
            return Err(Error::NestingTooDeep {
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn out_of_memory(&self) -> Error {
        Error::out_of_memory(self.output.len())
    }

    fn write_byte(&mut self, b: u8) -> Result<()> {
        self.output.push(b).map_err(|_| self.out_of_memory())
    }

    fn write_str(&mut self, s: &str) -> Result<()> {
        self.write_bytes(s.as_bytes())
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.output
            .extend_from_slice(bytes)
            .map_err(|_| self.out_of_memory())
    }

    fn write_key(&mut self, key: &str) -> Result<()> {
        if needs_quotes(key) {
            self.write_quoted(key)
        } else {
            self.write_str(key)
        }
    }

    fn write_quoted(&mut self, s: &str) -> Result<()> {
        let bytes = s.as_bytes();
        self.write_byte(b'\'')?;
        let mut run_start = 0;
        for (i, &b) in bytes.iter().enumerate() {
            let escaped: &[u8] = match b {
                b'\\' => b"\\\\",
                b'\'' => b"\\'",
                b'\n' => b"\\n",
                b'\r' => b"\\r",
                b'\t' => b"\\t",
                _ => continue,
            };
            self.write_bytes(&bytes[run_start..i])?;
            self.write_bytes(escaped)?;
            run_start = i + 1;
        }
        self.write_bytes(&bytes[run_start..])?;
        self.write_byte(b'\'')
    }
}

#[inline]
fn needs_quotes(key: &str) -> bool {
    key.is_empty()
        || key
            .bytes()
            .any(|b| is_delimiter(b) || b == b'\'' || b == b'"' || is_space(b))
}

const INLINE_CAPACITY: usize = 40;

/// Fixed-capacity text used to format scalars without a heap allocation.
pub(crate) struct InlineText {
    bytes: [u8; INLINE_CAPACITY],
    len: usize,
}

impl InlineText {
    fn new() -> Self {
        InlineText {
            bytes: [0; INLINE_CAPACITY],
            len: 0,
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        // Only whole `&str`s are ever written.
        std::str::from_utf8(&self.bytes[..self.len]).unwrap_or_default()
    }

    fn truncate(&mut self, len: usize) {
        self.len = self.len.min(len);
    }
}

impl fmt::Write for InlineText {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        if end > INLINE_CAPACITY {
            return Err(fmt::Error);
        }
        self.bytes[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

/// Formats a finite number with 15 significant digits, the way C's `%.15g` does.
///
/// Trailing zeros are dropped. Exponents below -4 or at least 15 switch to
/// scientific notation with a signed, two-digit-minimum exponent.
pub(crate) fn format_number(n: f64) -> std::result::Result<InlineText, fmt::Error> {
    let mut out = InlineText::new();
    if n == 0.0 {
        out.write_str(if n.is_sign_negative() { "-0" } else { "0" })?;
        return Ok(out);
    }

    let mut scientific = InlineText::new();
    write!(scientific, "{:.14e}", n)?;
    let (mantissa, exponent) = scientific.as_str().split_once('e').ok_or(fmt::Error)?;
    let exponent = exponent.parse::<i32>().map_err(|_| fmt::Error)?;

    if !(-4..15).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(
            out,
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )?;
    } else {
        let decimals = (14 - exponent) as usize;
        write!(out, "{:.*}", decimals, n)?;
        let trimmed = trim_fraction(out.as_str()).len();
        out.truncate(trimmed);
    }
    Ok(out)
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Converts any `Serialize` type into a [`Value`] tree.
///
/// Structs and maps become objects, sequences and tuples become arrays,
/// `Option::None` and unit become null, unit variants become strings, and
/// other enum variants become one-entry objects keyed by the variant name.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use slon::{Value, ValueSerializer};
///
/// #[derive(Serialize)]
/// enum Shape { Circle { r: f64 } }
///
/// let value = Shape::Circle { r: 1.5 }.serialize(ValueSerializer).unwrap();
/// assert_eq!(value.to_string(), "(Circle: (r: 1.5))");
/// ```
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeMap {
    map: Map,
    current_key: Option<String>,
}

/// Collects a tuple or struct variant, then wraps it as `(variant: ...)`.
pub struct SerializeVariant<T> {
    variant: &'static str,
    inner: T,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVariant<SerializeVec>;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeVariant<SerializeMap>;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::Number(v as f64))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        self.serialize_f64(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        if v.is_finite() {
            Ok(Value::Number(v))
        } else {
            Err(Error::invalid_arguments(format!(
                "{} cannot be represented as a SLON number",
                v
            )))
        }
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Array(v.iter().map(|&b| Value::from(b)).collect()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let inner = value.serialize(self)?;
        if name != DATETIME_TOKEN {
            return Ok(inner);
        }
        match inner {
            Value::String(s) => s.parse::<DateTime>().map(Value::DateTime).map_err(|_| {
                Error::invalid_arguments(format!("{:?} is not a SLON date-time", s))
            }),
            other => Ok(other),
        }
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let mut map = Map::with_capacity(1);
        map.push(variant.to_string(), to_value(value)?);
        Ok(Value::Object(map))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVariant<SerializeVec>> {
        Ok(SerializeVariant {
            variant,
            inner: SerializeVec::new(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVariant<SerializeMap>> {
        Ok(SerializeVariant {
            variant,
            inner: SerializeMap::new(len),
        })
    }
}

impl SerializeVec {
    fn new(capacity: usize) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
        }
    }
}

impl SerializeMap {
    fn new(capacity: usize) -> Self {
        SerializeMap {
            map: Map::with_capacity(capacity),
            current_key: None,
        }
    }
}

impl<T> SerializeVariant<T> {
    fn wrap(variant: &'static str, value: Value) -> Value {
        let mut map = Map::with_capacity(1);
        map.push(variant.to_string(), value);
        Value::Object(map)
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleVariant for SerializeVariant<SerializeVec> {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(&mut self.inner, value)
    }

    fn end(self) -> Result<Value> {
        let inner = ser::SerializeSeq::end(self.inner)?;
        Ok(Self::wrap(self.variant, inner))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_value(key)? {
            Value::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            other => Err(Error::invalid_arguments(format!(
                "object keys must be strings, found {:?}",
                other
            ))),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self.current_key.take().ok_or_else(|| {
            Error::invalid_arguments("serialize_value called without serialize_key")
        })?;
        self.map.push(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.push(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeVariant<SerializeMap> {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeStruct::serialize_field(&mut self.inner, key, value)
    }

    fn end(self) -> Result<Value> {
        let inner = ser::SerializeStruct::end(self.inner)?;
        Ok(Self::wrap(self.variant, inner))
    }
}

fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn render(value: &Value) -> String {
        let mut serializer = Serializer::new();
        serializer.serialize_value(value).unwrap();
        serializer.into_inner().unwrap()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(render(&Value::Null), "null");
        assert_eq!(render(&Value::Bool(true)), "true");
        assert_eq!(render(&Value::Bool(false)), "false");
        assert_eq!(
            render(&Value::DateTime(DateTime::new(2024, 1, 2, 3, 4, 5, 6))),
            "2024-01-02/03:04:05.006"
        );
    }

    #[test]
    fn test_number_format_matches_percent_g() {
        let cases = [
            (0.0, "0"),
            (-0.0, "-0"),
            (1.0, "1"),
            (-12.5, "-12.5"),
            (0.1, "0.1"),
            (1.0 / 3.0, "0.333333333333333"),
            (100.0, "100"),
            (123456789012345.0, "123456789012345"),
            (1e15, "1e+15"),
            (1234567890123456789.0, "1.23456789012346e+18"),
            (0.0001, "0.0001"),
            (0.00001, "1e-05"),
            (1.5e-10, "1.5e-10"),
            (1e100, "1e+100"),
            (f64::MAX, "1.79769313486232e+308"),
            (5e-324, "4.94065645841247e-324"),
            (999999999999999.9, "1e+15"),
        ];
        for (n, expected) in cases {
            assert_eq!(format_number(n).unwrap().as_str(), expected, "formatting {:e}", n);
        }
    }

    #[test]
    fn test_non_finite_number_is_rejected() {
        let mut serializer = Serializer::new();
        let err = serializer
            .serialize_value(&Value::Number(f64::NAN))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArguments(_)));
    }

    #[test]
    fn test_overwide_datetime_is_rejected() {
        let cases = [
            DateTime::new(10000, 1, 2, 3, 4, 5, 6),
            DateTime::new(2024, 100, 2, 3, 4, 5, 6),
            DateTime::new(2024, 1, 2, 3, 4, 5, 1000),
        ];
        for dt in cases {
            let mut serializer = Serializer::new();
            let err = serializer.serialize_value(&Value::DateTime(dt)).unwrap_err();
            assert!(matches!(err, Error::InvalidArguments(_)), "{:?}", dt);
        }

        let mut serializer = Serializer::new();
        let nested = Value::Array(vec![Value::DateTime(DateTime::new(2024, 1, 1, 0, 0, 0, 1000))]);
        assert!(serializer.serialize_value(&nested).is_err());
    }

    #[test]
    fn test_written_datetime_parses_back() {
        let dt = DateTime::new(7, 99, 0, 0, 59, 99, 999);
        let text = render(&Value::DateTime(dt));
        assert_eq!(text, "0007-99-00/00:59:99.999");
        assert_eq!(crate::parse(&text).unwrap(), Value::DateTime(dt));
    }

    #[test]
    fn test_string_escaping() {
        assert_eq!(render(&Value::from("it's")), r"'it\'s'");
        assert_eq!(render(&Value::from("a\\b")), r"'a\\b'");
        assert_eq!(render(&Value::from("l1\nl2\r\t")), r"'l1\nl2\r\t'");
        assert_eq!(render(&Value::from("say \"hi\"")), "'say \"hi\"'");
        // Other control bytes pass through unescaped.
        assert_eq!(render(&Value::from("a\u{1}b")), "'a\u{1}b'");
        assert_eq!(render(&Value::from("")), "''");
    }

    #[test]
    fn test_key_quoting() {
        let map = Map::from(vec![
            ("plain".to_string(), Value::Null),
            ("a b".to_string(), Value::Null),
            ("".to_string(), Value::Null),
            ("x:y".to_string(), Value::Null),
            ("it's".to_string(), Value::Null),
            ("-1".to_string(), Value::Null),
        ]);
        assert_eq!(
            render(&Value::Object(map)),
            r"(plain: null, 'a b': null, '': null, 'x:y': null, 'it\'s': null, -1: null)"
        );
    }

    #[test]
    fn test_containers() {
        assert_eq!(render(&Value::Array(vec![])), "[]");
        assert_eq!(render(&Value::Object(Map::new())), "()");
        let nested = Value::Array(vec![
            Value::from(1),
            Value::Object(Map::from(vec![(
                "k".to_string(),
                Value::Array(vec![Value::from("v")]),
            )])),
        ]);
        assert_eq!(render(&nested), "[1 | (k: ['v'])]");
    }

    #[test]
    fn test_nesting_limit() {
        let mut value = Value::Null;
        for _ in 0..4 {
            value = Value::Array(vec![value]);
        }
        let mut serializer = Serializer::with_options(&SlonOptions::new().with_max_depth(3));
        assert_eq!(
            serializer.serialize_value(&value),
            Err(Error::NestingTooDeep { limit: 3 })
        );

        let mut serializer = Serializer::with_options(&SlonOptions::new().with_max_depth(4));
        assert!(serializer.serialize_value(&value).is_ok());
    }

    #[test]
    fn test_value_serializer_structs_and_enums() {
        #[derive(Serialize)]
        struct Point {
            x: i32,
            y: Option<f64>,
        }

        #[derive(Serialize)]
        enum Event {
            Start,
            Move(i32, i32),
            Named(String),
        }

        let point = to_value(&Point { x: 1, y: None }).unwrap();
        assert_eq!(render(&point), "(x: 1, y: null)");
        assert_eq!(render(&to_value(&Event::Start).unwrap()), "'Start'");
        assert_eq!(render(&to_value(&Event::Move(1, -2)).unwrap()), "(Move: [1 | -2])");
        assert_eq!(
            render(&to_value(&Event::Named("n".into())).unwrap()),
            "(Named: 'n')"
        );
    }

    #[test]
    fn test_value_serializer_datetime_token() {
        let dt = DateTime::new(2024, 3, 1, 18, 22, 10, 1);
        assert_eq!(to_value(&dt).unwrap(), Value::DateTime(dt));
    }

    #[test]
    fn test_value_serializer_rejects_non_string_keys() {
        let mut map = BTreeMap::new();
        map.insert(1, "one");
        assert!(matches!(to_value(&map), Err(Error::InvalidArguments(_))));
    }

    #[test]
    fn test_value_serializer_rejects_non_finite() {
        assert!(to_value(&f64::INFINITY).is_err());
        assert!(to_value(&vec![1.0, f64::NAN]).is_err());
    }
}
