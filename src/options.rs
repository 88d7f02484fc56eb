//! Configuration options for SLON parsing and serialization.
//!
//! The canonical text form is fixed, so the only knob is how deeply objects
//! and arrays may nest. The limit applies to both directions: the parser
//! rejects deeper input with [`ErrorCode::NestingTooDeep`](crate::ErrorCode),
//! and the serializer rejects deeper value trees with
//! [`Error::NestingTooDeep`](crate::Error).
//!
//! ## Examples
//!
//! ```rust
//! use slon::{parse_with_options, SlonOptions};
//!
//! let options = SlonOptions::new().with_max_depth(2);
//! assert!(parse_with_options("[[1]]", &options).is_ok());
//! assert!(parse_with_options("[[[1]]]", &options).is_err());
//! ```

/// Nesting depth allowed by [`SlonOptions::default`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for SLON parsing and serialization.
///
/// # Examples
///
/// ```rust
/// use slon::SlonOptions;
///
/// let options = SlonOptions::new();
/// assert_eq!(options.max_depth, 128);
///
/// let options = SlonOptions::new().with_max_depth(16);
/// assert_eq!(options.max_depth, 16);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlonOptions {
    /// Maximum number of nested objects and arrays.
    pub max_depth: usize,
}

impl Default for SlonOptions {
    fn default() -> Self {
        SlonOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl SlonOptions {
    /// Creates default options (nesting limited to [`DEFAULT_MAX_DEPTH`]).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options without a nesting limit.
    ///
    /// Recursion then grows with the input, so deeply nested untrusted input
    /// can exhaust the stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slon::SlonOptions;
    ///
    /// assert_eq!(SlonOptions::unlimited().max_depth, usize::MAX);
    /// ```
    #[must_use]
    pub fn unlimited() -> Self {
        SlonOptions {
            max_depth: usize::MAX,
        }
    }

    /// Sets the maximum nesting depth. A depth of 0 admits only scalars.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
