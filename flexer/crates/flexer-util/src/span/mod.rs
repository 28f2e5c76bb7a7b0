//! Span module - Source location tracking.
//!
//! This module provides the two location types every token carries:
//! a [`SourceSpan`] (byte offset and length into the scanned buffer) and a
//! [`Position`] (1-based line and column of the first byte).
//!
//! # Examples
//!
//! ```
//! use flexer_util::span::{Position, SourceSpan};
//!
//! let source = b"local x = 1";
//! let span = SourceSpan::new(6, 1);
//! assert_eq!(span.text(source), b"x");
//!
//! let pos = Position::new(1, 7);
//! assert_eq!(pos.to_string(), "1:7");
//! ```

mod source_file;

use std::fmt;

pub use source_file::SourceFile;

/// A byte range inside the original, immutable source buffer.
///
/// A span never owns or copies text; use [`SourceSpan::text`] or
/// [`SourceSpan::as_str`] to view the bytes it covers.
///
/// # Examples
///
/// ```
/// use flexer_util::span::SourceSpan;
///
/// let span = SourceSpan::new(4, 3);
/// assert_eq!(span.offset, 4);
/// assert_eq!(span.len, 3);
/// assert_eq!(span.end(), 7);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SourceSpan {
    /// Start byte offset in source
    pub offset: usize,
    /// Length in bytes
    pub len: usize,
}

impl SourceSpan {
    /// Create a new span from an offset and a length.
    #[inline]
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Create a span covering `start..end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flexer_util::span::SourceSpan;
    ///
    /// let span = SourceSpan::from_range(2, 5);
    /// assert_eq!(span, SourceSpan::new(2, 3));
    /// ```
    #[inline]
    pub fn from_range(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} is past its end {end}");
        Self {
            offset: start,
            len: end - start,
        }
    }

    /// Create an empty span at a single offset.
    #[inline]
    pub const fn empty(offset: usize) -> Self {
        Self { offset, len: 0 }
    }

    /// Exclusive end offset.
    #[inline]
    pub const fn end(&self) -> usize {
        self.offset + self.len
    }

    /// Returns true if this span covers no bytes
    ///
    /// # Examples
    ///
    /// ```
    /// use flexer_util::span::SourceSpan;
    ///
    /// assert!(SourceSpan::empty(10).is_empty());
    /// assert!(!SourceSpan::new(10, 1).is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if this span contains a byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use flexer_util::span::SourceSpan;
    ///
    /// let span = SourceSpan::new(10, 10);
    /// assert!(span.contains(15));
    /// assert!(!span.contains(20));
    /// ```
    #[inline]
    pub const fn contains(&self, offset: usize) -> bool {
        self.offset <= offset && offset < self.end()
    }

    /// Returns the bytes covered by this span.
    ///
    /// # Panics
    ///
    /// Panics if the span lies outside `source`, which can only happen when a
    /// span is paired with a buffer other than the one it was produced from.
    #[inline]
    pub fn text<'s>(&self, source: &'s [u8]) -> &'s [u8] {
        &source[self.offset..self.end()]
    }

    /// Returns the covered text of a `str` source.
    ///
    /// Falls back to the empty string when the span does not fall on
    /// character boundaries (possible for single-byte invalid tokens inside a
    /// multi-byte character).
    ///
    /// # Examples
    ///
    /// ```
    /// use flexer_util::span::SourceSpan;
    ///
    /// let source = "return x";
    /// assert_eq!(SourceSpan::new(0, 6).as_str(source), "return");
    /// ```
    #[inline]
    pub fn as_str<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.offset..self.end()).unwrap_or("")
    }

    /// Merge two spans into a single span covering both
    ///
    /// # Examples
    ///
    /// ```
    /// use flexer_util::span::SourceSpan;
    ///
    /// let a = SourceSpan::new(10, 5);
    /// let b = SourceSpan::new(20, 5);
    /// assert_eq!(a.merge(b), SourceSpan::new(10, 15));
    /// ```
    #[inline]
    pub fn merge(self, other: SourceSpan) -> SourceSpan {
        SourceSpan::from_range(self.offset.min(other.offset), self.end().max(other.end()))
    }
}

/// A 1-based line and column.
///
/// Columns count bytes consumed since the last newline, so a tab or a
/// multi-byte character advances the column by its encoded width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Position {
    /// The position of the first byte of any buffer.
    pub const START: Position = Position { line: 1, column: 1 };

    /// Create a new position.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    #[inline]
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
