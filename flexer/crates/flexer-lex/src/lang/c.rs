//! C-like preset.
//!
//! C89 keywords, the full operator set, `//` and non-nesting `/* */`
//! comments, `"` strings and `'` character literals.

use crate::config::LexerConfig;
use crate::token::TokenKind;
use flexer_util::ConfigResult;

const fn kind(n: i32) -> TokenKind {
    TokenKind(TokenKind::FIRST_CUSTOM.0 + n)
}

/// `auto`
pub const AUTO: TokenKind = kind(0);
/// `break`
pub const BREAK: TokenKind = kind(1);
/// `case`
pub const CASE: TokenKind = kind(2);
/// `char`
pub const CHAR: TokenKind = kind(3);
/// `const`
pub const CONST: TokenKind = kind(4);
/// `continue`
pub const CONTINUE: TokenKind = kind(5);
/// `default`
pub const DEFAULT: TokenKind = kind(6);
/// `do`
pub const DO: TokenKind = kind(7);
/// `double`
pub const DOUBLE: TokenKind = kind(8);
/// `else`
pub const ELSE: TokenKind = kind(9);
/// `enum`
pub const ENUM: TokenKind = kind(10);
/// `extern`
pub const EXTERN: TokenKind = kind(11);
/// `float`
pub const FLOAT: TokenKind = kind(12);
/// `for`
pub const FOR: TokenKind = kind(13);
/// `goto`
pub const GOTO: TokenKind = kind(14);
/// `if`
pub const IF: TokenKind = kind(15);
/// `int`
pub const INT: TokenKind = kind(16);
/// `long`
pub const LONG: TokenKind = kind(17);
/// `register`
pub const REGISTER: TokenKind = kind(18);
/// `return`
pub const RETURN: TokenKind = kind(19);
/// `short`
pub const SHORT: TokenKind = kind(20);
/// `signed`
pub const SIGNED: TokenKind = kind(21);
/// `sizeof`
pub const SIZEOF: TokenKind = kind(22);
/// `static`
pub const STATIC: TokenKind = kind(23);
/// `struct`
pub const STRUCT: TokenKind = kind(24);
/// `switch`
pub const SWITCH: TokenKind = kind(25);
/// `typedef`
pub const TYPEDEF: TokenKind = kind(26);
/// `union`
pub const UNION: TokenKind = kind(27);
/// `unsigned`
pub const UNSIGNED: TokenKind = kind(28);
/// `void`
pub const VOID: TokenKind = kind(29);
/// `volatile`
pub const VOLATILE: TokenKind = kind(30);
/// `while`
pub const WHILE: TokenKind = kind(31);

/// `->`
pub const ARROW: TokenKind = kind(64);
/// `++`
pub const INC: TokenKind = kind(65);
/// `--`
pub const DEC: TokenKind = kind(66);
/// `<<`
pub const SHL: TokenKind = kind(67);
/// `>>`
pub const SHR: TokenKind = kind(68);
/// `<=`
pub const LE: TokenKind = kind(69);
/// `>=`
pub const GE: TokenKind = kind(70);
/// `==`
pub const EQ_EQ: TokenKind = kind(71);
/// `!=`
pub const NE: TokenKind = kind(72);
/// `&&`
pub const AND_AND: TokenKind = kind(73);
/// `||`
pub const OR_OR: TokenKind = kind(74);
/// `+=`
pub const ADD_ASSIGN: TokenKind = kind(75);
/// `-=`
pub const SUB_ASSIGN: TokenKind = kind(76);
/// `*=`
pub const MUL_ASSIGN: TokenKind = kind(77);
/// `/=`
pub const DIV_ASSIGN: TokenKind = kind(78);
/// `%=`
pub const MOD_ASSIGN: TokenKind = kind(79);
/// `&=`
pub const AND_ASSIGN: TokenKind = kind(80);
/// `|=`
pub const OR_ASSIGN: TokenKind = kind(81);
/// `^=`
pub const XOR_ASSIGN: TokenKind = kind(82);
/// `<<=`
pub const SHL_ASSIGN: TokenKind = kind(83);
/// `>>=`
pub const SHR_ASSIGN: TokenKind = kind(84);
/// `...`
pub const ELLIPSIS: TokenKind = kind(85);

/// Reserved words and their kinds.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("auto", AUTO),
    ("break", BREAK),
    ("case", CASE),
    ("char", CHAR),
    ("const", CONST),
    ("continue", CONTINUE),
    ("default", DEFAULT),
    ("do", DO),
    ("double", DOUBLE),
    ("else", ELSE),
    ("enum", ENUM),
    ("extern", EXTERN),
    ("float", FLOAT),
    ("for", FOR),
    ("goto", GOTO),
    ("if", IF),
    ("int", INT),
    ("long", LONG),
    ("register", REGISTER),
    ("return", RETURN),
    ("short", SHORT),
    ("signed", SIGNED),
    ("sizeof", SIZEOF),
    ("static", STATIC),
    ("struct", STRUCT),
    ("switch", SWITCH),
    ("typedef", TYPEDEF),
    ("union", UNION),
    ("unsigned", UNSIGNED),
    ("void", VOID),
    ("volatile", VOLATILE),
    ("while", WHILE),
];

/// Operators and punctuation.
pub const SYMBOLS: &[(&str, TokenKind)] = &[
    ("->", ARROW),
    ("++", INC),
    ("--", DEC),
    ("<<", SHL),
    (">>", SHR),
    ("<=", LE),
    (">=", GE),
    ("==", EQ_EQ),
    ("!=", NE),
    ("&&", AND_AND),
    ("||", OR_OR),
    ("+=", ADD_ASSIGN),
    ("-=", SUB_ASSIGN),
    ("*=", MUL_ASSIGN),
    ("/=", DIV_ASSIGN),
    ("%=", MOD_ASSIGN),
    ("&=", AND_ASSIGN),
    ("|=", OR_ASSIGN),
    ("^=", XOR_ASSIGN),
    ("<<=", SHL_ASSIGN),
    (">>=", SHR_ASSIGN),
    ("...", ELLIPSIS),
    ("+", TokenKind::punct(b'+')),
    ("-", TokenKind::punct(b'-')),
    ("*", TokenKind::punct(b'*')),
    ("/", TokenKind::punct(b'/')),
    ("%", TokenKind::punct(b'%')),
    ("&", TokenKind::punct(b'&')),
    ("|", TokenKind::punct(b'|')),
    ("^", TokenKind::punct(b'^')),
    ("~", TokenKind::punct(b'~')),
    ("!", TokenKind::punct(b'!')),
    ("<", TokenKind::punct(b'<')),
    (">", TokenKind::punct(b'>')),
    ("=", TokenKind::punct(b'=')),
    ("?", TokenKind::punct(b'?')),
    (":", TokenKind::punct(b':')),
    (";", TokenKind::punct(b';')),
    (",", TokenKind::punct(b',')),
    (".", TokenKind::punct(b'.')),
    ("(", TokenKind::punct(b'(')),
    (")", TokenKind::punct(b')')),
    ("[", TokenKind::punct(b'[')),
    ("]", TokenKind::punct(b']')),
    ("{", TokenKind::punct(b'{')),
    ("}", TokenKind::punct(b'}')),
    ("#", TokenKind::punct(b'#')),
];

/// Builds the C-like configuration.
pub fn config() -> ConfigResult<LexerConfig> {
    LexerConfig::builder()
        .keywords(KEYWORDS.iter().copied())
        .symbols(SYMBOLS.iter().copied())
        .line_comment("//")
        .block_comment("/*", "*/", false)
        .build()
}

/// Display name for a C-like kind.
pub fn kind_name(kind: TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::IDENTIFIER => Some("IDENT"),
        TokenKind::NUMBER => Some("NUMBER"),
        TokenKind::STRING => Some("STRING"),
        TokenKind::CHAR => Some("CHAR"),
        _ => super::lookup_name(kind, KEYWORDS, SYMBOLS),
    }
}
