//! Literal rules.
//!
//! A literal rule consumes one number, string, or character literal. The
//! scan loop consumes the byte that opened the literal, prefills a token,
//! and hands both to the active rule:
//!
//! - `token.kind` holds the configured kind for the literal class;
//! - `token.span` is empty and starts at the opening byte;
//! - `token.position` is the position of the opening byte.
//!
//! The rule advances the cursor to just past the literal and sets the kind
//! (for example to [`TokenKind::INVALID`] when the literal is unterminated),
//! the span, and the value. A rule that leaves the span empty gets the span
//! from the opening byte to the cursor. The position is always restored to
//! the opening byte's position afterwards.
//!
//! [`scan_number`] and [`scan_quoted`] are the default rules. They are public
//! so an override can fall back to them for the openers it does not handle.

use std::fmt;

use crate::ascii::{digit_value, is_digit_in_base, is_ident_continue, is_ident_start};
use crate::cursor::Cursor;
use crate::token::{NumericValue, Token, TokenKind};

/// The classes of literal a rule can be installed for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LiteralClass {
    /// Number literals, opened by a digit or by `.` before a digit.
    Number,
    /// String literals, opened by a configured string quote.
    String,
    /// Character literals, opened by a configured character quote.
    Character,
}

impl fmt::Display for LiteralClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LiteralClass::Number => "number",
            LiteralClass::String => "string",
            LiteralClass::Character => "character",
        })
    }
}

/// A caller-supplied literal scanner.
///
/// Any state a rule needs lives in the rule value itself; the trait takes
/// `&self` so one configuration can drive many scans, on many threads.
///
/// Closures implement the trait directly:
///
/// ```
/// use flexer_lex::{tokenize, LexerConfig, TokenKind};
///
/// // Treat `'` as a one-byte "tick" token instead of a character literal.
/// let config = LexerConfig::builder()
///     .char_rule(|_opener: u8, _cursor: &mut flexer_lex::Cursor<'_>, token: &mut flexer_lex::Token| {
///         token.kind = TokenKind::punct(b'\'');
///     })
///     .build()
///     .unwrap();
///
/// let tokens = tokenize("'a", &config);
/// assert_eq!(tokens[0].kind, TokenKind::punct(b'\''));
/// assert_eq!(tokens[1].kind, TokenKind::IDENTIFIER);
/// ```
pub trait LiteralRule: Send + Sync {
    /// Scans one literal. `opener` has already been consumed.
    fn scan(&self, opener: u8, cursor: &mut Cursor<'_>, token: &mut Token);
}

impl<F> LiteralRule for F
where
    F: Fn(u8, &mut Cursor<'_>, &mut Token) + Send + Sync,
{
    #[inline]
    fn scan(&self, opener: u8, cursor: &mut Cursor<'_>, token: &mut Token) {
        self(opener, cursor, token)
    }
}

/// Stack buffer size for float conversion; longer literals fall back to a
/// heap copy.
const FLOAT_BUF_LEN: usize = 128;

/// Default number rule.
///
/// Accepts `0x`/`0X` hexadecimal and `0b`/`0B` binary bodies with `_`
/// separators, and decimal bodies with an optional fraction (`.` followed by
/// a digit) and exponent (`e`/`E`, optional sign, at least one digit). An
/// identifier-shaped suffix such as `u8` or `f32` becomes part of the token
/// text. Integers are reported as [`NumericValue::Unsigned`], accumulated
/// with wrapping arithmetic over the digits of the body; floats as
/// [`NumericValue::Float`].
///
/// # Example
///
/// ```
/// use flexer_lex::{tokenize, LexerConfig, NumericValue};
///
/// let config = LexerConfig::builder().build().unwrap();
/// let source = "0x1A_u8";
/// let tokens = tokenize(source, &config);
///
/// assert_eq!(tokens[0].as_str(source), "0x1A_u8");
/// assert_eq!(tokens[0].value, Some(NumericValue::Unsigned(26)));
/// ```
pub fn scan_number(opener: u8, cursor: &mut Cursor<'_>, token: &mut Token) {
    let start = token.span.offset;

    let radix = match (opener, cursor.peek()) {
        (b'0', b'x' | b'X') => 16,
        (b'0', b'b' | b'B') => 2,
        _ => 10,
    };

    let mut is_float = false;
    let digits_start = if radix == 10 {
        start
    } else {
        cursor.advance();
        cursor.offset()
    };

    if radix != 10 {
        cursor.eat_while(|b| is_digit_in_base(b, radix) || b == b'_');
    } else {
        if opener == b'.' {
            is_float = true;
        }
        cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
        if !is_float && cursor.peek() == b'.' && cursor.peek_next().is_ascii_digit() {
            is_float = true;
            cursor.advance();
            cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
        }
        if exponent_ahead(cursor) {
            is_float = true;
            cursor.advance();
            if matches!(cursor.peek(), b'+' | b'-') {
                cursor.advance();
            }
            cursor.eat_while(|b| b.is_ascii_digit());
        }
    }

    let body_end = cursor.offset();

    if is_ident_start(cursor.peek()) {
        cursor.eat_while(is_ident_continue);
    }

    let source = cursor.source();
    token.value = Some(if is_float {
        NumericValue::Float(parse_float(&source[start..body_end]))
    } else {
        NumericValue::Unsigned(accumulate(&source[digits_start..body_end], radix))
    });
    token.span = cursor.span_from(start);
}

/// Returns true if the cursor sits on an exponent marker that has digits.
fn exponent_ahead(cursor: &Cursor<'_>) -> bool {
    if !matches!(cursor.peek(), b'e' | b'E') {
        return false;
    }
    match cursor.peek_next() {
        b'+' | b'-' => cursor.peek_at(2).is_ascii_digit(),
        b => b.is_ascii_digit(),
    }
}

/// Accumulates the digits of `body` in `radix`, skipping anything else.
fn accumulate(body: &[u8], radix: u32) -> u64 {
    body.iter()
        .filter_map(|&b| digit_value(b, radix))
        .fold(0u64, |acc, digit| {
            acc.wrapping_mul(u64::from(radix)).wrapping_add(digit)
        })
}

/// Parses a decimal float body, ignoring `_` separators.
fn parse_float(body: &[u8]) -> f64 {
    if !body.contains(&b'_') {
        return parse_ascii(body);
    }

    if body.len() <= FLOAT_BUF_LEN {
        let mut buf = [0u8; FLOAT_BUF_LEN];
        let mut len = 0;
        for &b in body.iter().filter(|&&b| b != b'_') {
            buf[len] = b;
            len += 1;
        }
        return parse_ascii(&buf[..len]);
    }

    let stripped: Vec<u8> = body.iter().copied().filter(|&b| b != b'_').collect();
    parse_ascii(&stripped)
}

fn parse_ascii(digits: &[u8]) -> f64 {
    std::str::from_utf8(digits)
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Default string and character rule.
///
/// Consumes up to the byte equal to `opener` or up to a raw newline,
/// whichever comes first. A backslash escapes the byte after it, quote and
/// newline included. When the closing quote is found it is consumed and the
/// prefilled kind is kept; otherwise the token becomes
/// [`TokenKind::INVALID`]. Either way the span starts at the opening quote.
///
/// # Example
///
/// ```
/// use flexer_lex::{tokenize, LexerConfig, TokenKind};
///
/// let config = LexerConfig::builder().build().unwrap();
/// let source = r#""a\"b" "open"#;
/// let tokens = tokenize(source, &config);
///
/// assert_eq!(tokens[0].kind, TokenKind::STRING);
/// assert_eq!(tokens[0].as_str(source), r#""a\"b""#);
/// assert_eq!(tokens[1].kind, TokenKind::INVALID);
/// assert_eq!(tokens[1].as_str(source), "\"open");
/// ```
pub fn scan_quoted(opener: u8, cursor: &mut Cursor<'_>, token: &mut Token) {
    let start = token.span.offset;

    while !cursor.at_end() {
        let b = cursor.peek();
        if b == opener || b == b'\n' {
            break;
        }
        cursor.advance();
        if b == b'\\' && !cursor.at_end() {
            cursor.advance();
        }
    }

    if !cursor.match_byte(opener) {
        token.kind = TokenKind::INVALID;
    }
    token.span = cursor.span_from(start);
}
