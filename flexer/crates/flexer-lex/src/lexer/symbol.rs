//! Symbol lexing.
//!
//! Operators and punctuation come from the configured symbol table, matched
//! longest first against the remaining input.

use flexer_util::Position;

use crate::token::Token;

use super::Lexer;

/// Outcome of a symbol lookup at the cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) enum SymbolScan {
    /// No configured symbol prefixes the input.
    NoMatch,
    /// A skip symbol was consumed.
    Skipped,
    /// A symbol token was consumed.
    Token(Token),
}

impl<'src, 'cfg> Lexer<'src, 'cfg> {
    /// Consumes the longest symbol at the cursor.
    ///
    /// The cursor advances by the full symbol length whether the symbol is
    /// emitted or skipped; nothing is consumed when no symbol matches.
    pub(super) fn lex_symbol(&mut self, start: usize, position: Position) -> SymbolScan {
        let config = self.config;
        let Some(entry) = config.symbols().longest_match(self.cursor.remaining()) else {
            return SymbolScan::NoMatch;
        };

        self.cursor.advance_by(entry.text().len());

        if entry.is_skip() {
            SymbolScan::Skipped
        } else {
            SymbolScan::Token(Token::new(entry.kind(), self.cursor.span_from(start), position))
        }
    }
}
