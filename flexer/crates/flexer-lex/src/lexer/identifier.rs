//! Identifier and keyword lexing.
//!
//! This module handles lexing of identifiers and keywords.

use flexer_util::Position;

use crate::ascii::is_ident_continue;
use crate::token::Token;

use super::Lexer;

impl<'src, 'cfg> Lexer<'src, 'cfg> {
    /// Lexes an identifier or keyword whose first byte is already consumed.
    ///
    /// Identifiers start with a letter or underscore, followed by
    /// alphanumeric characters or underscores. After reading the whole run,
    /// the text is looked up in the keyword table; only exact matches count.
    pub(super) fn lex_identifier(&mut self, start: usize, position: Position) -> Token {
        let config = self.config;
        self.cursor.eat_while(is_ident_continue);

        let text = self.cursor.slice_from(start);
        let kind = config
            .keywords()
            .get(text)
            .unwrap_or(config.kinds().identifier);

        Token::new(kind, self.cursor.span_from(start), position)
    }
}
