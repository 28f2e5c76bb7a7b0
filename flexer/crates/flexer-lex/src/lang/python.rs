//! A small Python-like preset.
//!
//! Covers `def`, `if`, `else` and `return`, arithmetic, comparison and
//! logical operators, `#` comments, and both quote styles for strings. A
//! backslash directly before a newline is an explicit line continuation and
//! is skipped like whitespace.

use crate::config::LexerConfig;
use crate::token::TokenKind;
use flexer_util::ConfigResult;

const fn kind(n: i32) -> TokenKind {
    TokenKind(TokenKind::FIRST_CUSTOM.0 + n)
}

/// `def`
pub const DEF: TokenKind = kind(0);
/// `if`
pub const IF: TokenKind = kind(1);
/// `else`
pub const ELSE: TokenKind = kind(2);
/// `return`
pub const RETURN: TokenKind = kind(3);

/// `==`
pub const EQ_EQ: TokenKind = kind(16);
/// `!=`
pub const NE: TokenKind = kind(17);
/// `<=`
pub const LE: TokenKind = kind(18);
/// `>=`
pub const GE: TokenKind = kind(19);
/// `&&`
pub const AND: TokenKind = kind(20);
/// `||`
pub const OR: TokenKind = kind(21);
/// `->`
pub const ARROW: TokenKind = kind(22);

/// Reserved words and their kinds.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("def", DEF),
    ("if", IF),
    ("else", ELSE),
    ("return", RETURN),
];

/// Operators and punctuation.
pub const SYMBOLS: &[(&str, TokenKind)] = &[
    ("+", TokenKind::punct(b'+')),
    ("-", TokenKind::punct(b'-')),
    ("*", TokenKind::punct(b'*')),
    ("/", TokenKind::punct(b'/')),
    ("==", EQ_EQ),
    ("!=", NE),
    ("<", TokenKind::punct(b'<')),
    ("<=", LE),
    (">", TokenKind::punct(b'>')),
    (">=", GE),
    ("&&", AND),
    ("||", OR),
    ("->", ARROW),
    ("=", TokenKind::punct(b'=')),
    ("(", TokenKind::punct(b'(')),
    (")", TokenKind::punct(b')')),
    ("{", TokenKind::punct(b'{')),
    ("}", TokenKind::punct(b'}')),
    (",", TokenKind::punct(b',')),
    (";", TokenKind::punct(b';')),
    (":", TokenKind::punct(b':')),
    ("\\\n", TokenKind::SKIP),
];

/// Builds the Python-like configuration.
pub fn config() -> ConfigResult<LexerConfig> {
    LexerConfig::builder()
        .keywords(KEYWORDS.iter().copied())
        .symbols(SYMBOLS.iter().copied())
        .line_comment("#")
        .string_quotes("\"'")
        .char_quotes("")
        .build()
}

/// Display name for a Python-like kind.
pub fn kind_name(kind: TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::IDENTIFIER => Some("ID"),
        TokenKind::NUMBER => Some("NUM"),
        TokenKind::STRING => Some("STR"),
        _ => super::lookup_name(kind, KEYWORDS, SYMBOLS),
    }
}
