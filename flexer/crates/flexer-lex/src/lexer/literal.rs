//! Literal lexing.
//!
//! Number, string and character literals are delegated to the configured
//! override for their class, or to the default rules.

use flexer_util::{Position, SourceSpan};

use crate::rules::{scan_number, scan_quoted, LiteralClass};
use crate::token::{Token, TokenKind};

use super::Lexer;

impl<'src, 'cfg> Lexer<'src, 'cfg> {
    /// Lexes a literal whose opening byte is already consumed.
    ///
    /// Prefills the token, runs the rule, then fills in an empty span and
    /// pins the position to the opening byte. A rule that rewinds the cursor
    /// behind the opener is clamped back to just past it, and a rule that
    /// reports end of input mid-stream gets an invalid token instead.
    pub(super) fn lex_literal(
        &mut self,
        class: LiteralClass,
        opener: u8,
        start: usize,
        position: Position,
    ) -> Token {
        let config = self.config;
        let past_opener = self.cursor.snapshot();
        let mut token = Token::new(
            config.kinds().for_class(class),
            SourceSpan::empty(start),
            position,
        );

        match config.rules().get(class) {
            Some(rule) => rule.scan(opener, &mut self.cursor, &mut token),
            None => match class {
                LiteralClass::Number => scan_number(opener, &mut self.cursor, &mut token),
                LiteralClass::String | LiteralClass::Character => {
                    scan_quoted(opener, &mut self.cursor, &mut token)
                },
            },
        }

        if self.cursor.offset() < past_opener.offset {
            tracing::trace!(%class, offset = start, "literal rule rewound past its opener");
            self.cursor.restore(past_opener);
        }
        if token.span.is_empty() {
            token.span = self.cursor.span_from(start);
        }
        token.position = position;

        if token.kind.is_eof() {
            tracing::trace!(%class, offset = start, "literal rule produced the end-of-input kind");
            token.kind = TokenKind::INVALID;
        }

        if token.is_invalid() {
            tracing::trace!(%class, offset = start, len = token.span.len, "invalid literal");
        }
        token
    }
}
