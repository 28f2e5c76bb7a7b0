//! Byte cursor for traversing source buffers.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while stepping through a source buffer one byte at a time. It is the only
//! thing in the scanner that moves the scan position, and it keeps the
//! line/column counters in step with every byte it consumes.

use flexer_util::{Position, SourceSpan};

/// The byte returned by [`Cursor::peek`] and friends at end-of-input.
pub const EOF_BYTE: u8 = 0;

/// A cursor over an immutable byte buffer.
///
/// Every consuming operation goes through [`Cursor::advance`], so the
/// line and column always describe the next unconsumed byte.
///
/// # Example
///
/// ```
/// use flexer_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("x = 1");
///
/// assert_eq!(cursor.peek(), b'x');
/// assert_eq!(cursor.advance(), b'x');
/// assert_eq!(cursor.peek(), b' ');
/// assert_eq!(cursor.column(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'src> {
    /// The source buffer being traversed.
    source: &'src [u8],

    /// Current byte offset in the source.
    offset: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based).
    column: u32,
}

impl<'src> Cursor<'src> {
    /// Creates a new cursor at the start of `source`.
    ///
    /// Accepts anything that views as bytes: `&str`, `&[u8]`, `&Vec<u8>`,
    /// byte string literals.
    pub fn new<S: AsRef<[u8]> + ?Sized>(source: &'src S) -> Self {
        Self {
            source: source.as_ref(),
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current byte without consuming it, or [`EOF_BYTE`] at
    /// end-of-input.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.peek_at(0)
    }

    /// Returns the byte after the current one, or [`EOF_BYTE`].
    #[inline]
    pub fn peek_next(&self) -> u8 {
        self.peek_at(1)
    }

    /// Returns the byte `n` positions ahead, or [`EOF_BYTE`] past the end.
    ///
    /// # Example
    ///
    /// ```
    /// use flexer_lex::cursor::{Cursor, EOF_BYTE};
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.peek_at(2), b'c');
    /// assert_eq!(cursor.peek_at(3), EOF_BYTE);
    /// ```
    #[inline]
    pub fn peek_at(&self, n: usize) -> u8 {
        self.source.get(self.offset + n).copied().unwrap_or(EOF_BYTE)
    }

    /// Returns true once every byte has been consumed.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Consumes one byte and returns it, updating line and column.
    ///
    /// Callers check [`Cursor::at_end`] (or rely on the [`EOF_BYTE`] from
    /// [`Cursor::peek`]) first. At end-of-input nothing is consumed and
    /// [`EOF_BYTE`] is returned.
    #[inline]
    pub fn advance(&mut self) -> u8 {
        let Some(&b) = self.source.get(self.offset) else {
            return EOF_BYTE;
        };
        self.offset += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        b
    }

    /// Consumes up to `count` bytes, stopping at end-of-input.
    ///
    /// # Example
    ///
    /// ```
    /// use flexer_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("ab\ncd");
    /// cursor.advance_by(4);
    /// assert_eq!(cursor.peek(), b'd');
    /// assert_eq!((cursor.line(), cursor.column()), (2, 2));
    /// ```
    pub fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            if self.at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Consumes the expected byte if it is next.
    ///
    /// Returns true if the byte was matched and consumed, false otherwise.
    #[inline]
    pub fn match_byte(&mut self, expected: u8) -> bool {
        if !self.at_end() && self.peek() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true if the unconsumed input begins with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Consumes bytes while `pred` holds and returns how many were consumed.
    ///
    /// # Example
    ///
    /// ```
    /// use flexer_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("===[");
    /// assert_eq!(cursor.eat_while(|b| b == b'='), 3);
    /// assert_eq!(cursor.peek(), b'[');
    /// ```
    pub fn eat_while(&mut self, mut pred: impl FnMut(u8) -> bool) -> usize {
        let start = self.offset;
        while !self.at_end() && pred(self.peek()) {
            self.advance();
        }
        self.offset - start
    }

    /// Returns the current byte offset.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the line and column of the next unconsumed byte.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Returns the unconsumed part of the source.
    #[inline]
    pub fn remaining(&self) -> &'src [u8] {
        &self.source[self.offset.min(self.source.len())..]
    }

    /// Returns the bytes from `start` up to the current offset.
    ///
    /// # Example
    ///
    /// ```
    /// use flexer_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("local x");
    /// let start = cursor.offset();
    /// cursor.advance_by(5);
    /// assert_eq!(cursor.slice_from(start), b"local");
    /// ```
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'src [u8] {
        &self.source[start..self.offset]
    }

    /// Returns the span from `start` up to the current offset.
    #[inline]
    pub fn span_from(&self, start: usize) -> SourceSpan {
        SourceSpan::from_range(start, self.offset)
    }

    /// Returns the full source buffer.
    #[inline]
    pub fn source(&self) -> &'src [u8] {
        self.source
    }

    /// Creates a snapshot of the current cursor state.
    ///
    /// Literal rules use snapshots to look ahead past a candidate closing
    /// delimiter and rewind when it turns out not to match.
    ///
    /// # Example
    ///
    /// ```
    /// use flexer_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("]=]");
    /// let mark = cursor.snapshot();
    /// cursor.advance_by(2);
    /// cursor.restore(mark);
    /// assert_eq!(cursor.offset(), 0);
    /// ```
    #[inline]
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    /// Restores the cursor to a previously saved snapshot.
    ///
    /// Only snapshots taken from this cursor are meaningful; the offset is
    /// clamped to the buffer so a foreign snapshot can never cause an
    /// out-of-bounds read.
    #[inline]
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.offset = snapshot.offset.min(self.source.len());
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}

/// A snapshot of cursor state that can be restored later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte offset in source.
    pub offset: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}
