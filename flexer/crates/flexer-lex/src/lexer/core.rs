//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use std::iter::FusedIterator;

use flexer_util::Position;

use crate::ascii::{is_ident_start, is_whitespace};
use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::rules::LiteralClass;
use crate::token::Token;

use super::comment::CommentScan;
use super::symbol::SymbolScan;

/// Table-driven lexer over one source buffer.
///
/// The lexer borrows both the source and the configuration; neither is
/// copied, and scanning with the default rules performs no allocation.
///
/// # Example
///
/// ```
/// use flexer_lex::{Lexer, LexerConfig, TokenKind};
///
/// let config = LexerConfig::builder()
///     .keyword("end", TokenKind::FIRST_CUSTOM)
///     .build()
///     .unwrap();
///
/// let mut lexer = Lexer::new("end endx", &config);
/// assert_eq!(lexer.next_token().kind, TokenKind::FIRST_CUSTOM);
/// assert_eq!(lexer.next_token().kind, TokenKind::IDENTIFIER);
/// assert!(lexer.next_token().is_eof());
/// assert!(lexer.next_token().is_eof());
/// ```
#[derive(Clone, Debug)]
pub struct Lexer<'src, 'cfg> {
    /// Byte cursor for source traversal.
    pub(super) cursor: Cursor<'src>,

    /// Tables and rules driving the scan.
    pub(super) config: &'cfg LexerConfig,
}

impl<'src, 'cfg> Lexer<'src, 'cfg> {
    /// Creates a new lexer at the start of `source`.
    pub fn new<S: AsRef<[u8]> + ?Sized>(source: &'src S, config: &'cfg LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            config,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Whitespace, comments and skip symbols are consumed silently. Every
    /// other call consumes at least one byte, so repeated calls always reach
    /// the end-of-input token, which is then returned on every further call.
    pub fn next_token(&mut self) -> Token {
        let config = self.config;

        loop {
            if self.cursor.at_end() {
                return Token::eof(self.cursor.offset(), self.cursor.position());
            }

            let start = self.cursor.offset();
            let position = self.cursor.position();

            if is_whitespace(self.cursor.peek()) {
                self.cursor.advance();
                continue;
            }

            match self.skip_comment() {
                CommentScan::Skipped => continue,
                CommentScan::Unterminated => {
                    return Token::invalid(self.cursor.span_from(start), position);
                },
                CommentScan::None => {},
            }

            match self.lex_symbol(start, position) {
                SymbolScan::Token(token) => return token,
                SymbolScan::Skipped => continue,
                SymbolScan::NoMatch => {},
            }

            let c = self.cursor.advance();

            if is_ident_start(c) {
                return self.lex_identifier(start, position);
            }

            if c.is_ascii_digit() || (c == b'.' && self.cursor.peek().is_ascii_digit()) {
                return self.lex_literal(LiteralClass::Number, c, start, position);
            }

            if let Some(class) = config.quote_class(c) {
                return self.lex_literal(class, c, start, position);
            }

            tracing::trace!(byte = c, offset = start, %position, "unrecognized byte");
            return Token::invalid(self.cursor.span_from(start), position);
        }
    }

    /// Returns the configuration driving this lexer.
    #[inline]
    pub fn config(&self) -> &'cfg LexerConfig {
        self.config
    }

    /// Returns the full source buffer.
    #[inline]
    pub fn source(&self) -> &'src [u8] {
        self.cursor.source()
    }

    /// Returns the byte offset of the next unconsumed byte.
    #[inline]
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    /// Returns the line and column of the next unconsumed byte.
    #[inline]
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }
}

impl<'src, 'cfg> Iterator for Lexer<'src, 'cfg> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl FusedIterator for Lexer<'_, '_> {}

/// Scans all of `source` and returns its tokens, without the final
/// end-of-input token.
///
/// # Example
///
/// ```
/// use flexer_lex::{tokenize, LexerConfig, TokenKind};
///
/// let config = LexerConfig::builder()
///     .symbol("=", TokenKind::punct(b'='))
///     .symbol("==", TokenKind::FIRST_CUSTOM)
///     .build()
///     .unwrap();
///
/// let kinds: Vec<_> = tokenize("a == b", &config).iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::IDENTIFIER, TokenKind::FIRST_CUSTOM, TokenKind::IDENTIFIER]
/// );
/// ```
pub fn tokenize<S: AsRef<[u8]> + ?Sized>(source: &S, config: &LexerConfig) -> Vec<Token> {
    Lexer::new(source, config).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;
    use flexer_util::SourceSpan;

    fn config() -> LexerConfig {
        LexerConfig::builder()
            .symbol("(", TokenKind::punct(b'('))
            .symbol(")", TokenKind::punct(b')'))
            .symbol("=", TokenKind::punct(b'='))
            .symbol("==", TokenKind(300))
            .line_comment("#")
            .build()
            .unwrap()
    }

    #[test]
    fn test_empty_source() {
        let config = config();
        let mut lexer = Lexer::new("", &config);
        let token = lexer.next_token();
        assert!(token.is_eof());
        assert_eq!(token.span, SourceSpan::empty(0));
        assert_eq!(token.position, Position::START);
    }

    #[test]
    fn test_whitespace_only() {
        let config = config();
        let mut lexer = Lexer::new(" \t\r\n\x0b\x0c ", &config);
        let token = lexer.next_token();
        assert!(token.is_eof());
        assert_eq!(token.span.offset, 7);
        assert_eq!(token.position, Position::new(2, 4));
    }

    #[test]
    fn test_eof_is_repeatable() {
        let config = config();
        let mut lexer = Lexer::new("x", &config);
        assert_eq!(lexer.next_token().kind, TokenKind::IDENTIFIER);
        let first = lexer.next_token();
        let second = lexer.next_token();
        assert!(first.is_eof());
        assert_eq!(first, second);
    }

    #[test]
    fn test_dispatch_order() {
        let config = config();
        let source = "f(x) == 1.5 \"s\" 'c' # trailing";
        let kinds: Vec<TokenKind> = tokenize(source, &config).iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::IDENTIFIER,
                TokenKind::punct(b'('),
                TokenKind::IDENTIFIER,
                TokenKind::punct(b')'),
                TokenKind(300),
                TokenKind::NUMBER,
                TokenKind::STRING,
                TokenKind::CHAR,
            ]
        );
    }

    #[test]
    fn test_unrecognized_byte() {
        let config = config();
        let source = "a $ b";
        let tokens = tokenize(source, &config);
        assert_eq!(tokens.len(), 3);
        assert!(tokens[1].is_invalid());
        assert_eq!(tokens[1].span, SourceSpan::new(2, 1));
        assert_eq!(tokens[1].position, Position::new(1, 3));
    }

    #[test]
    fn test_non_ascii_bytes_are_invalid_one_at_a_time() {
        let config = config();
        let tokens = tokenize("é", &config);
        assert_eq!(tokens.len(), 2);
        assert!(tokens.iter().all(|t| t.is_invalid() && t.span.len == 1));
    }

    #[test]
    fn test_leading_dot_number_without_dot_symbol() {
        let config = config();
        let tokens = tokenize(".5 .x", &config);
        assert_eq!(tokens[0].kind, TokenKind::NUMBER);
        assert_eq!(tokens[0].span, SourceSpan::new(0, 2));
        assert!(tokens[1].is_invalid());
        assert_eq!(tokens[2].kind, TokenKind::IDENTIFIER);
    }

    #[test]
    fn test_accessors_track_progress() {
        let config = config();
        let mut lexer = Lexer::new("ab\ncd", &config);
        lexer.next_token();
        assert_eq!(lexer.offset(), 2);
        lexer.next_token();
        assert_eq!(lexer.position(), Position::new(2, 3));
        assert_eq!((lexer.line(), lexer.column()), (2, 3));
        assert_eq!(lexer.source(), b"ab\ncd");
        assert!(lexer.config().symbols().len() == 4);
    }

    #[test]
    fn test_iterator_is_fused() {
        let config = config();
        let mut lexer = Lexer::new("x", &config);
        assert!(lexer.next().is_some());
        assert!(lexer.next().is_none());
        assert!(lexer.next().is_none());
    }
}
