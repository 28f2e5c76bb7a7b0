//! Source files with a precomputed line index.
//!
//! The scanner itself tracks line/column incrementally and never needs this
//! type; it exists for tools that want to show the offending source line
//! next to an invalid token.

use std::fmt;
use std::sync::Arc;

use super::{Position, SourceSpan};

static_assertions::assert_impl_all!(SourceFile: Send, Sync);

/// A named source buffer with precomputed line start offsets.
///
/// # Examples
///
/// ```
/// use flexer_util::span::SourceFile;
///
/// let file = SourceFile::new("init.lua", "local a\nreturn a\n");
/// assert_eq!(file.name(), "init.lua");
/// assert_eq!(file.line_count(), 3);
/// assert_eq!(file.line_at(2), Some(&b"return a"[..]));
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<[u8]>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file.
    pub fn new(name: impl Into<String>, content: impl AsRef<[u8]>) -> Self {
        let content: Arc<[u8]> = Arc::from(content.as_ref());
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &[u8]) -> Arc<[usize]> {
        std::iter::once(0)
            .chain(
                content
                    .iter()
                    .enumerate()
                    .filter(|&(_, &b)| b == b'\n')
                    .map(|(i, _)| i + 1),
            )
            .collect()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// A trailing newline opens a final, empty line, the same way the
    /// scanner's line counter does.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Get the contents of a 1-based line, without its line terminator.
    pub fn line_at(&self, line: usize) -> Option<&[u8]> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.content.len());

        let mut text = &self.content[start..end];
        while let [rest @ .., b'\n' | b'\r'] = text {
            text = rest;
        }
        Some(text)
    }

    /// Convert a byte offset to a 1-based position.
    ///
    /// Offsets past the end clamp to the end of the file.
    ///
    /// # Examples
    ///
    /// ```
    /// use flexer_util::span::{Position, SourceFile};
    ///
    /// let file = SourceFile::new("a.py", "x = 1\ny = 2");
    /// assert_eq!(file.offset_to_position(0), Position::new(1, 1));
    /// assert_eq!(file.offset_to_position(6), Position::new(2, 1));
    /// assert_eq!(file.offset_to_position(10), Position::new(2, 5));
    /// ```
    pub fn offset_to_position(&self, offset: usize) -> Position {
        let offset = offset.min(self.content.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(insert_point) => insert_point.saturating_sub(1),
        };
        let line_start = self.line_starts[line];
        Position::new(to_u32(line + 1), to_u32(offset - line_start + 1))
    }

    /// Render a span as a `--> file:line:col` header, the source line, and a
    /// caret underline.
    ///
    /// The underline is clipped to the first line of the span; empty spans
    /// get a single caret.
    ///
    /// # Examples
    ///
    /// ```
    /// use flexer_util::span::{Position, SourceFile, SourceSpan};
    ///
    /// let file = SourceFile::new("t.lua", "print(\"oops)\n");
    /// let rendered = file.format_span(SourceSpan::new(6, 6), Position::new(1, 7));
    /// assert!(rendered.starts_with("--> t.lua:1:7"));
    /// assert!(rendered.ends_with("^^^^^^"));
    /// ```
    pub fn format_span(&self, span: SourceSpan, position: Position) -> String {
        let line_text = self.line_at(position.line as usize).unwrap_or_default();
        let gutter = self.line_count().to_string().len().max(3);

        let underline_start = (position.column as usize).saturating_sub(1);
        let room = line_text.len().saturating_sub(underline_start).max(1);
        let underline_len = span.len.clamp(1, room);

        format!(
            "--> {}:{}\n{:>gutter$} | {}\n{:>gutter$} | {}{}",
            self.name,
            position,
            position.line,
            String::from_utf8_lossy(line_text),
            "",
            " ".repeat(underline_start),
            "^".repeat(underline_len),
        )
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

impl fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("len", &self.content.len())
            .field("line_count", &self.line_count())
            .finish()
    }
}
