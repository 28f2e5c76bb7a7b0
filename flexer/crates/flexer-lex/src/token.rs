//! Token definitions.
//!
//! A [`Token`] is a small `Copy` value: a [`TokenKind`] tag, the span of
//! source bytes it covers, the position of its first byte, and an optional
//! numeric payload filled in by literal rules. Tokens never own text; use
//! [`Token::text`] against the scanned buffer to view it.

use std::fmt;

use flexer_util::{Position, SourceSpan};
use static_assertions::{assert_impl_all, const_assert};

/// An integer tag identifying what a token is.
///
/// The kind space is split in three:
///
/// - reserved values: [`TokenKind::EOF`] and [`TokenKind::INVALID`];
/// - `1..USER`: free for caller kinds, conventionally the ASCII code of a
///   single punctuation byte (see [`TokenKind::punct`]);
/// - `USER..`: caller-defined kinds. The four default literal kinds sit at
///   the bottom of this range; [`TokenKind::FIRST_CUSTOM`] is the first
///   value that never collides with them.
///
/// # Example
///
/// ```
/// use flexer_lex::TokenKind;
///
/// const LOCAL: TokenKind = TokenKind(TokenKind::FIRST_CUSTOM.0 + 1);
///
/// assert_eq!(TokenKind::punct(b'('), TokenKind(40));
/// assert_eq!(TokenKind::punct(b'(').to_string(), "'('");
/// assert!(LOCAL.is_custom());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenKind(pub i32);

impl TokenKind {
    /// End of input. Returned forever once the source is exhausted.
    pub const EOF: TokenKind = TokenKind(0);

    /// Malformed input: unterminated literals and comments, stray bytes.
    pub const INVALID: TokenKind = TokenKind(-1);

    /// Symbol-table sentinel: recognize the symbol and discard it.
    ///
    /// Shares its value with [`TokenKind::EOF`]; a symbol can never produce
    /// an end-of-input token.
    pub const SKIP: TokenKind = TokenKind(0);

    /// Baseline above which caller-defined kinds start.
    pub const USER: TokenKind = TokenKind(256);

    /// Default kind for identifiers that are not keywords.
    pub const IDENTIFIER: TokenKind = TokenKind(Self::USER.0);

    /// Default kind for number literals.
    pub const NUMBER: TokenKind = TokenKind(Self::USER.0 + 1);

    /// Default kind for string literals.
    pub const STRING: TokenKind = TokenKind(Self::USER.0 + 2);

    /// Default kind for character literals.
    pub const CHAR: TokenKind = TokenKind(Self::USER.0 + 3);

    /// First kind guaranteed not to collide with the default literal kinds.
    pub const FIRST_CUSTOM: TokenKind = TokenKind(Self::USER.0 + 4);

    /// Kind aliasing a single ASCII punctuation byte.
    #[inline]
    pub const fn punct(byte: u8) -> TokenKind {
        TokenKind(byte as i32)
    }

    /// Returns true for the end-of-input kind.
    #[inline]
    pub const fn is_eof(self) -> bool {
        self.0 == Self::EOF.0
    }

    /// Returns true for the invalid kind.
    #[inline]
    pub const fn is_invalid(self) -> bool {
        self.0 == Self::INVALID.0
    }

    /// Returns true for the two kinds the scan loop itself emits, end of
    /// input and invalid. Keywords and literals may not produce them.
    #[inline]
    pub const fn is_reserved(self) -> bool {
        self.is_eof() || self.is_invalid()
    }

    /// Returns true for kinds in the caller range that cannot collide with
    /// the default literal kinds.
    #[inline]
    pub const fn is_custom(self) -> bool {
        self.0 >= Self::FIRST_CUSTOM.0
    }

    /// Returns the punctuation byte this kind aliases, if any.
    #[inline]
    pub fn as_punct(self) -> Option<u8> {
        u8::try_from(self.0)
            .ok()
            .filter(|b| b.is_ascii_punctuation())
    }
}

impl From<u8> for TokenKind {
    #[inline]
    fn from(byte: u8) -> Self {
        TokenKind::punct(byte)
    }
}

impl From<i32> for TokenKind {
    #[inline]
    fn from(value: i32) -> Self {
        TokenKind(value)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_eof() {
            return f.write_str("EOF");
        }
        if self.is_invalid() {
            return f.write_str("INVALID");
        }
        match self.as_punct() {
            Some(b) => write!(f, "'{}'", b as char),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Numeric payload attached to number literals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumericValue {
    /// Signed integer value.
    Signed(i64),
    /// Unsigned integer value. The default number rule produces this.
    Unsigned(u64),
    /// Floating-point value.
    Float(f64),
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericValue::Signed(v) => write!(f, "{}", v),
            NumericValue::Unsigned(v) => write!(f, "{}", v),
            NumericValue::Float(v) => write!(f, "{:?}", v),
        }
    }
}

/// A single lexical unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token {
    /// What the token is.
    pub kind: TokenKind,
    /// The source bytes it covers.
    pub span: SourceSpan,
    /// Line and column of its first byte.
    pub position: Position,
    /// Parsed value, for literals whose rule computes one.
    pub value: Option<NumericValue>,
}

impl Token {
    /// Creates a token without a value.
    #[inline]
    pub const fn new(kind: TokenKind, span: SourceSpan, position: Position) -> Self {
        Self {
            kind,
            span,
            position,
            value: None,
        }
    }

    /// Creates the end-of-input token at `offset`.
    #[inline]
    pub const fn eof(offset: usize, position: Position) -> Self {
        Self::new(TokenKind::EOF, SourceSpan::empty(offset), position)
    }

    /// Creates an invalid token.
    #[inline]
    pub const fn invalid(span: SourceSpan, position: Position) -> Self {
        Self::new(TokenKind::INVALID, span, position)
    }

    /// Returns true for the end-of-input token.
    #[inline]
    pub const fn is_eof(&self) -> bool {
        self.kind.is_eof()
    }

    /// Returns true for an invalid token.
    #[inline]
    pub const fn is_invalid(&self) -> bool {
        self.kind.is_invalid()
    }

    /// Returns the bytes of `source` this token covers.
    ///
    /// # Example
    ///
    /// ```
    /// use flexer_lex::{tokenize, LexerConfig};
    ///
    /// let config = LexerConfig::builder().build().unwrap();
    /// let source = "alpha beta";
    /// let tokens = tokenize(source, &config);
    /// assert_eq!(tokens[1].text(source.as_bytes()), b"beta");
    /// ```
    #[inline]
    pub fn text<'s>(&self, source: &'s [u8]) -> &'s [u8] {
        self.span.text(source)
    }

    /// Returns the text of a `str` source this token covers.
    #[inline]
    pub fn as_str<'s>(&self, source: &'s str) -> &'s str {
        self.span.as_str(source)
    }
}

const_assert!(TokenKind::USER.0 > u8::MAX as i32);
assert_impl_all!(Token: Send, Sync, Copy);
assert_impl_all!(TokenKind: Send, Sync, Copy);
