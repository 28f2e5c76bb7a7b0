//! flexer-lex - Table-Driven Lexical Scanner
//!
//! This crate provides a configurable lexer (tokenizer) whose vocabulary is
//! supplied by the caller: symbol and keyword tables, comment delimiters,
//! quote bytes, and optional replacement rules for number, string and
//! character literals. The same engine scans Lua, a Python-like language and
//! C-like syntax through the presets in [`lang`].
//!
//! # Overview
//!
//! The engine works on raw bytes and never copies source text. Each token
//! carries a kind, a byte span into the source, the line and column of its
//! first byte, and an optional numeric value. Malformed input never stops a
//! scan: it comes back as [`TokenKind::INVALID`] tokens and the scan moves
//! on.
//!
//! # Example Usage
//!
//! ```
//! use flexer_lex::{Lexer, LexerConfig, NumericValue, TokenKind};
//!
//! const IF: TokenKind = TokenKind::FIRST_CUSTOM;
//! const EQ_EQ: TokenKind = TokenKind(TokenKind::FIRST_CUSTOM.0 + 1);
//!
//! let config = LexerConfig::builder()
//!     .keyword("if", IF)
//!     .symbol("=", TokenKind::punct(b'='))
//!     .symbol("==", EQ_EQ)
//!     .line_comment("#")
//!     .build()
//!     .unwrap();
//!
//! let source = "if x == 0x1A_u8 # done";
//! let mut lexer = Lexer::new(source, &config);
//!
//! assert_eq!(lexer.next_token().kind, IF);
//! assert_eq!(lexer.next_token().kind, TokenKind::IDENTIFIER);
//! assert_eq!(lexer.next_token().kind, EQ_EQ);
//!
//! let number = lexer.next_token();
//! assert_eq!(number.as_str(source), "0x1A_u8");
//! assert_eq!(number.value, Some(NumericValue::Unsigned(26)));
//!
//! assert!(lexer.next_token().is_eof());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions
//! - [`config`] - Configuration and its builder
//! - [`table`] - Symbol and keyword tables
//! - [`rules`] - Literal rule trait and the default rules
//! - [`lexer`] - The scan loop
//! - [`cursor`] - Byte cursor for source traversal
//! - [`ascii`] - Byte classification
//! - [`lang`] - Language presets
//!
//! # Scan Order
//!
//! For each token the lexer tries, in order: end of input, whitespace,
//! block then line comments, the longest configured symbol, identifiers and
//! keywords, numbers, quoted literals. Anything left is a one-byte invalid
//! token.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod ascii;
pub mod config;
pub mod cursor;
pub mod lang;
pub mod lexer;
pub mod rules;
pub mod table;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use config::{
    BlockComment, CommentConfig, LexerConfig, LexerConfigBuilder, LiteralKinds, LiteralRules,
};
pub use cursor::{Cursor, CursorSnapshot};
pub use lexer::{tokenize, Lexer};
pub use rules::{scan_number, scan_quoted, LiteralClass, LiteralRule};
pub use table::{KeywordEntry, SymbolEntry};
pub use token::{NumericValue, Token, TokenKind};

pub use flexer_util::{ConfigError, ConfigResult, Position, SourceSpan};
