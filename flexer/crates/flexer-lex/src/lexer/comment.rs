//! Comment skipping.
//!
//! This module handles skipping line and block comments. The block opener
//! is tried first, so a block delimiter that begins with the line prefix
//! (Lua's `--[[` next to `--`) is still reachable.
//!
//! Block delimiters may carry a level: a run of a fill byte before their
//! last byte. A leveled comment only closes at a closer of the same level.

use crate::config::BlockComment;

use super::Lexer;

/// A block delimiter matched at the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Delimiter {
    len: usize,
    level: usize,
}

/// Matches `delim` at the start of `input`. With a fill byte, any run of it
/// may sit before the delimiter's last byte.
fn match_delimiter(input: &[u8], delim: &[u8], fill: Option<u8>) -> Option<Delimiter> {
    let Some(fill) = fill else {
        return input.starts_with(delim).then_some(Delimiter {
            len: delim.len(),
            level: 0,
        });
    };

    let (&last, head) = delim.split_last()?;
    let rest = input.strip_prefix(head)?;
    let level = rest.iter().take_while(|&&b| b == fill).count();
    (rest.get(level) == Some(&last)).then_some(Delimiter {
        len: head.len() + level + 1,
        level,
    })
}

/// Outcome of trying to skip a comment at the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum CommentScan {
    /// No comment starts here.
    None,
    /// A comment was consumed.
    Skipped,
    /// A block comment ran to end-of-input without closing.
    Unterminated,
}

impl<'src, 'cfg> Lexer<'src, 'cfg> {
    /// Skips a comment starting at the cursor, if there is one.
    pub(super) fn skip_comment(&mut self) -> CommentScan {
        let config = self.config;
        let comments = config.comments();

        if let Some(block) = &comments.block {
            let opener = match_delimiter(self.cursor.remaining(), &block.start, block.level);
            if let Some(open) = opener {
                return self.skip_block_comment(block, open);
            }
        }

        if let Some(prefix) = &comments.line {
            if self.cursor.starts_with(prefix) {
                self.cursor.advance_by(prefix.len());
                self.cursor.eat_while(|b| b != b'\n');
                return CommentScan::Skipped;
            }
        }

        CommentScan::None
    }

    /// Skips a block comment.
    ///
    /// With nesting, each further opener increments the depth and each
    /// closer decrements it; without nesting the first closer ends the
    /// comment. Only delimiters at the opener's level count.
    fn skip_block_comment(&mut self, block: &BlockComment, open: Delimiter) -> CommentScan {
        let start = self.cursor.offset();
        self.cursor.advance_by(open.len);
        let mut depth: usize = 1;
        let at_level = |input: &[u8], delim: &[u8]| {
            match_delimiter(input, delim, block.level).filter(|d| d.level == open.level)
        };

        while !self.cursor.at_end() {
            let input = self.cursor.remaining();
            if let Some(inner) = block.nested.then(|| at_level(input, &block.start)).flatten() {
                self.cursor.advance_by(inner.len);
                depth += 1;
            } else if let Some(close) = at_level(input, &block.end) {
                self.cursor.advance_by(close.len);
                depth -= 1;
                if depth == 0 {
                    return CommentScan::Skipped;
                }
            } else {
                self.cursor.advance();
            }
        }

        tracing::trace!(offset = start, depth, "unterminated block comment");
        CommentScan::Unterminated
    }
}
