//! Lua 5.4 preset.
//!
//! Lua needs two overrides on top of the tables:
//!
//! - [`LongBracketRule`] scans `[[ ... ]]` and `[==[ ... ]==]` strings and
//!   owns the `[` byte, so a plain `[` still comes out as punctuation;
//! - [`LuaNumberRule`] reports integers as signed, wrapping the way Lua's
//!   integer arithmetic does.
//!
//! Block comments are `--[[ ... ]]` and the leveled `--[==[ ... ]==]`. A
//! `--[` not followed by a complete long-bracket opener is a line comment.
//!
//! Since `.` is a symbol, a number written `.5` scans as `.` then `5`.

use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::rules::{scan_number, scan_quoted, LiteralRule};
use crate::token::{NumericValue, Token, TokenKind};
use flexer_util::ConfigResult;

const fn kind(n: i32) -> TokenKind {
    TokenKind(TokenKind::FIRST_CUSTOM.0 + n)
}

// Reserved words.
/// `and`
pub const AND: TokenKind = kind(0);
/// `break`
pub const BREAK: TokenKind = kind(1);
/// `do`
pub const DO: TokenKind = kind(2);
/// `else`
pub const ELSE: TokenKind = kind(3);
/// `elseif`
pub const ELSEIF: TokenKind = kind(4);
/// `end`
pub const END: TokenKind = kind(5);
/// `false`
pub const FALSE: TokenKind = kind(6);
/// `for`
pub const FOR: TokenKind = kind(7);
/// `function`
pub const FUNCTION: TokenKind = kind(8);
/// `goto`
pub const GOTO: TokenKind = kind(9);
/// `if`
pub const IF: TokenKind = kind(10);
/// `in`
pub const IN: TokenKind = kind(11);
/// `local`
pub const LOCAL: TokenKind = kind(12);
/// `nil`
pub const NIL: TokenKind = kind(13);
/// `not`
pub const NOT: TokenKind = kind(14);
/// `or`
pub const OR: TokenKind = kind(15);
/// `repeat`
pub const REPEAT: TokenKind = kind(16);
/// `return`
pub const RETURN: TokenKind = kind(17);
/// `then`
pub const THEN: TokenKind = kind(18);
/// `true`
pub const TRUE: TokenKind = kind(19);
/// `until`
pub const UNTIL: TokenKind = kind(20);
/// `while`
pub const WHILE: TokenKind = kind(21);

// Multi-byte operators.
/// `..`
pub const CONCAT: TokenKind = kind(32);
/// `...`
pub const DOTS: TokenKind = kind(33);
/// `==`
pub const EQ: TokenKind = kind(34);
/// `~=`
pub const NE: TokenKind = kind(35);
/// `<=`
pub const LE: TokenKind = kind(36);
/// `>=`
pub const GE: TokenKind = kind(37);
/// `<<`
pub const SHL: TokenKind = kind(38);
/// `>>`
pub const SHR: TokenKind = kind(39);
/// `//`
pub const IDIV: TokenKind = kind(40);
/// `::`
pub const DBCOLON: TokenKind = kind(41);

/// The `[` punctuation kind, emitted by [`LongBracketRule`].
pub const LBRACKET: TokenKind = TokenKind::punct(b'[');

/// Reserved words and their kinds.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("and", AND),
    ("break", BREAK),
    ("do", DO),
    ("else", ELSE),
    ("elseif", ELSEIF),
    ("end", END),
    ("false", FALSE),
    ("for", FOR),
    ("function", FUNCTION),
    ("goto", GOTO),
    ("if", IF),
    ("in", IN),
    ("local", LOCAL),
    ("nil", NIL),
    ("not", NOT),
    ("or", OR),
    ("repeat", REPEAT),
    ("return", RETURN),
    ("then", THEN),
    ("true", TRUE),
    ("until", UNTIL),
    ("while", WHILE),
];

/// Operators and punctuation. `[` is absent; the string rule owns it.
pub const SYMBOLS: &[(&str, TokenKind)] = &[
    ("..", CONCAT),
    ("...", DOTS),
    ("==", EQ),
    ("~=", NE),
    ("<=", LE),
    (">=", GE),
    ("<<", SHL),
    (">>", SHR),
    ("//", IDIV),
    ("::", DBCOLON),
    ("+", TokenKind::punct(b'+')),
    ("-", TokenKind::punct(b'-')),
    ("*", TokenKind::punct(b'*')),
    ("/", TokenKind::punct(b'/')),
    ("%", TokenKind::punct(b'%')),
    ("^", TokenKind::punct(b'^')),
    ("#", TokenKind::punct(b'#')),
    ("&", TokenKind::punct(b'&')),
    ("~", TokenKind::punct(b'~')),
    ("|", TokenKind::punct(b'|')),
    ("<", TokenKind::punct(b'<')),
    (">", TokenKind::punct(b'>')),
    ("=", TokenKind::punct(b'=')),
    ("(", TokenKind::punct(b'(')),
    (")", TokenKind::punct(b')')),
    ("{", TokenKind::punct(b'{')),
    ("}", TokenKind::punct(b'}')),
    ("]", TokenKind::punct(b']')),
    (";", TokenKind::punct(b';')),
    (":", TokenKind::punct(b':')),
    (",", TokenKind::punct(b',')),
    (".", TokenKind::punct(b'.')),
];

/// Builds the Lua configuration.
pub fn config() -> ConfigResult<LexerConfig> {
    LexerConfig::builder()
        .keywords(KEYWORDS.iter().copied())
        .symbols(SYMBOLS.iter().copied())
        .line_comment("--")
        .leveled_block_comment("--[[", "]]", b'=')
        .string_quotes("\"'[")
        .char_quotes("")
        .string_rule(LongBracketRule::new(LBRACKET))
        .number_rule(LuaNumberRule)
        .build()
}

/// Display name for a Lua kind.
pub fn kind_name(kind: TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::IDENTIFIER => Some("NAME"),
        TokenKind::NUMBER => Some("NUMBER"),
        TokenKind::STRING => Some("STRING"),
        LBRACKET => Some("["),
        _ => super::lookup_name(kind, KEYWORDS, SYMBOLS),
    }
}

/// String rule for Lua long brackets.
///
/// `[` followed by `n` equals signs and another `[` opens a long string
/// that runs to the first `]`, `n` equals signs, `]`. Newlines and
/// backslashes inside are literal. A `[` that does not open a long string
/// produces a one-byte token of `bracket_kind`. Quoted strings go to the
/// default rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LongBracketRule {
    bracket_kind: TokenKind,
}

impl LongBracketRule {
    /// Creates the rule; a lone `[` is emitted as `bracket_kind`.
    pub const fn new(bracket_kind: TokenKind) -> Self {
        Self { bracket_kind }
    }
}

impl LiteralRule for LongBracketRule {
    fn scan(&self, opener: u8, cursor: &mut Cursor<'_>, token: &mut Token) {
        if opener != b'[' {
            return scan_quoted(opener, cursor, token);
        }

        let start = token.span.offset;
        let after_opener = cursor.snapshot();
        let level = cursor.eat_while(|b| b == b'=');

        if !cursor.match_byte(b'[') {
            cursor.restore(after_opener);
            token.kind = self.bracket_kind;
            token.span = cursor.span_from(start);
            return;
        }

        loop {
            if cursor.at_end() {
                token.kind = TokenKind::INVALID;
                break;
            }
            if cursor.advance() == b']' {
                let mark = cursor.snapshot();
                if cursor.eat_while(|b| b == b'=') == level && cursor.match_byte(b']') {
                    break;
                }
                cursor.restore(mark);
            }
        }

        token.span = cursor.span_from(start);
    }
}

/// Number rule reporting integers as Lua's signed 64-bit integers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LuaNumberRule;

impl LiteralRule for LuaNumberRule {
    fn scan(&self, opener: u8, cursor: &mut Cursor<'_>, token: &mut Token) {
        scan_number(opener, cursor, token);
        if let Some(NumericValue::Unsigned(v)) = token.value {
            token.value = Some(NumericValue::Signed(v as i64));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use flexer_util::{Position, SourceSpan};

    fn lex(source: &str) -> Vec<Token> {
        let config = config().unwrap();
        tokenize(source, &config)
    }

    #[test]
    fn test_long_bracket_level_two() {
        let source = "[==[text]==]";
        let tokens = lex(source);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::STRING);
        assert_eq!(tokens[0].span, SourceSpan::new(0, source.len()));
    }

    #[test]
    fn test_long_bracket_mismatched_level() {
        let source = "[==[text]=]";
        let tokens = lex(source);
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_invalid());
        assert_eq!(tokens[0].span, SourceSpan::new(0, source.len()));
    }

    #[test]
    fn test_long_bracket_ignores_inner_closers() {
        let source = "[=[a]]b]==]c]=] x";
        let tokens = lex(source);
        assert_eq!(tokens[0].as_str(source), "[=[a]]b]==]c]=]");
        assert_eq!(tokens[1].kind, TokenKind::IDENTIFIER);
    }

    #[test]
    fn test_long_bracket_spans_lines() {
        let source = "[[one\ntwo]] x";
        let tokens = lex(source);
        assert_eq!(tokens[0].kind, TokenKind::STRING);
        assert_eq!(tokens[1].position, Position::new(2, 7));
    }

    #[test]
    fn test_plain_bracket_is_punctuation() {
        let source = "t[1] = t[=x";
        let kinds: Vec<_> = lex(source).iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::IDENTIFIER,
                LBRACKET,
                TokenKind::NUMBER,
                TokenKind::punct(b']'),
                TokenKind::punct(b'='),
                TokenKind::IDENTIFIER,
                LBRACKET,
                TokenKind::punct(b'='),
                TokenKind::IDENTIFIER,
            ]
        );
    }

    #[test]
    fn test_quoted_strings_use_default_rule() {
        let source = r#"'it''s' "a\"b""#;
        let tokens = lex(source);
        assert_eq!(tokens.len(), 3);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::STRING));
        assert_eq!(tokens[2].as_str(source), r#""a\"b""#);
    }

    #[test]
    fn test_keywords_and_operators() {
        let source = "local function f(...) return a ~= b .. c // 2 end";
        let kinds: Vec<_> = lex(source).iter().map(|t| t.kind).collect();
        assert_eq!(kinds[0], LOCAL);
        assert_eq!(kinds[1], FUNCTION);
        assert_eq!(kinds[4], DOTS);
        assert!(kinds.contains(&NE));
        assert!(kinds.contains(&CONCAT));
        assert!(kinds.contains(&IDIV));
        assert_eq!(*kinds.last().unwrap(), END);
    }

    #[test]
    fn test_comments() {
        let source = "a -- line\n--[[ block\n comment ]] b --[= not an opener";
        let tokens = lex(source);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].as_str(source), "b");
    }

    #[test]
    fn test_leveled_comment_spans_lines() {
        let source = "a --[==[ one\n]] ]=] still\n]==] b";
        let tokens = lex(source);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].as_str(source), "b");
        assert_eq!(tokens[1].position, Position::new(3, 6));
    }

    #[test]
    fn test_unterminated_leveled_comment() {
        let source = "x --[=[ open ]]";
        let tokens = lex(source);
        assert_eq!(tokens.len(), 2);
        assert!(tokens[1].is_invalid());
        assert_eq!(tokens[1].span, SourceSpan::new(2, source.len() - 2));
    }

    #[test]
    fn test_signed_integers() {
        let tokens = lex("42 0xFFFFFFFFFFFFFFFF 1.5");
        assert_eq!(tokens[0].value, Some(NumericValue::Signed(42)));
        assert_eq!(tokens[1].value, Some(NumericValue::Signed(-1)));
        assert_eq!(tokens[2].value, Some(NumericValue::Float(1.5)));
    }

    #[test]
    fn test_concat_after_number() {
        let source = "1..2";
        let tokens = lex(source);
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].kind, CONCAT);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(kind_name(WHILE), Some("while"));
        assert_eq!(kind_name(SHL), Some("<<"));
        assert_eq!(kind_name(TokenKind::punct(b'#')), Some("#"));
        assert_eq!(kind_name(LBRACKET), Some("["));
        assert_eq!(kind_name(TokenKind::IDENTIFIER), Some("NAME"));
        assert_eq!(kind_name(TokenKind(9999)), None);
    }
}
