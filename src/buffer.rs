//! Growable output buffer.
//!
//! [`Buffer`] is an append-only byte accumulator shared by the parser (while
//! decoding escape sequences) and the serializer (while rendering canonical
//! text). Capacity starts at [`MIN_CAPACITY`] and doubles whenever an append
//! would not fit, so any sequence of appends costs linear time overall.
//!
//! Growth goes through [`Vec::try_reserve_exact`], which means running out of
//! memory is reported as an [`AllocError`] instead of aborting the process.
//!
//! ```rust
//! use slon::Buffer;
//!
//! let mut buffer = Buffer::new();
//! buffer.push(b'[').unwrap();
//! buffer.push_str("1 | 2").unwrap();
//! buffer.push(b']').unwrap();
//! assert_eq!(buffer.as_bytes(), b"[1 | 2]");
//! assert_eq!(buffer.capacity(), 64);
//! ```

use std::string::FromUtf8Error;
use thiserror::Error;

/// Capacity of the first allocation made by a [`Buffer`].
pub const MIN_CAPACITY: usize = 64;

/// The buffer could not grow to hold an append.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("buffer allocation failed")]
pub struct AllocError;

/// Append-only byte accumulator with amortized doubling growth.
#[derive(Debug, Clone, Default)]
pub struct Buffer {
    data: Vec<u8>,
}

impl Buffer {
    /// Creates an empty buffer. Nothing is allocated until the first append.
    #[must_use]
    pub const fn new() -> Self {
        Buffer { data: Vec::new() }
    }

    /// Makes room for `additional` more bytes, doubling capacity as needed.
    fn grow_for(&mut self, additional: usize) -> Result<(), AllocError> {
        let len = self.data.len();
        let needed = len.checked_add(additional).ok_or(AllocError)?;
        if needed <= self.data.capacity() {
            return Ok(());
        }

        let mut capacity = self.data.capacity().max(MIN_CAPACITY);
        while capacity < needed {
            capacity = capacity.checked_mul(2).ok_or(AllocError)?;
        }

        self.data
            .try_reserve_exact(capacity - len)
            .map_err(|_| AllocError)
    }

    /// Appends a single byte.
    #[inline]
    pub fn push(&mut self, byte: u8) -> Result<(), AllocError> {
        self.grow_for(1)?;
        self.data.push(byte);
        Ok(())
    }

    /// Appends a span of bytes.
    pub fn extend_from_slice(&mut self, bytes: &[u8]) -> Result<(), AllocError> {
        self.grow_for(bytes.len())?;
        self.data.extend_from_slice(bytes);
        Ok(())
    }

    #[inline]
    pub fn push_str(&mut self, s: &str) -> Result<(), AllocError> {
        self.extend_from_slice(s.as_bytes())
    }

    /// Appends the UTF-8 encoding of `ch` (one to four bytes).
    pub fn push_char(&mut self, ch: char) -> Result<(), AllocError> {
        let mut utf8 = [0u8; 4];
        self.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes())
    }

    /// Returns the bytes appended so far.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Frees the backing allocation and leaves the buffer empty.
    pub fn release(&mut self) {
        self.data = Vec::new();
    }

    /// Converts the contents into a `String`, failing if they are not UTF-8.
    pub fn into_string(self) -> Result<String, FromUtf8Error> {
        String::from_utf8(self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_append_allocates_minimum() {
        let mut buffer = Buffer::new();
        assert_eq!(buffer.capacity(), 0);
        buffer.push(b'x').unwrap();
        assert_eq!(buffer.capacity(), MIN_CAPACITY);
    }

    #[test]
    fn test_capacity_doubles() {
        let mut buffer = Buffer::new();
        buffer.extend_from_slice(&[b'a'; 64]).unwrap();
        assert_eq!(buffer.capacity(), 64);
        buffer.push(b'b').unwrap();
        assert_eq!(buffer.capacity(), 128);
        buffer.extend_from_slice(&[b'c'; 300]).unwrap();
        assert_eq!(buffer.capacity(), 512);
        assert_eq!(buffer.len(), 365);
    }

    #[test]
    fn test_push_char_encodes_utf8() {
        let mut buffer = Buffer::new();
        buffer.push_char('a').unwrap();
        buffer.push_char('é').unwrap();
        buffer.push_char('€').unwrap();
        assert_eq!(buffer.as_bytes(), "aé€".as_bytes());
        assert_eq!(buffer.into_string().unwrap(), "aé€");
    }

    #[test]
    fn test_release() {
        let mut buffer = Buffer::new();
        buffer.push_str("hello").unwrap();
        buffer.release();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 0);
    }

    #[test]
    fn test_into_string_rejects_invalid_utf8() {
        let mut buffer = Buffer::new();
        buffer.push(0xFF).unwrap();
        assert!(buffer.into_string().is_err());
    }

    #[test]
    fn test_overflowing_request_is_an_error() {
        let mut buffer = Buffer::new();
        buffer.push(b'x').unwrap();
        assert_eq!(buffer.grow_for(usize::MAX), Err(AllocError));
    }
}
