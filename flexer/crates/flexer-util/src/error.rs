//! Core error types for flexer-util crate
//!
//! Scanning itself never fails: malformed input is reported in-band as
//! invalid tokens. The only fallible step is building a scanner
//! configuration, whose table checks are described by [`ConfigError`].

use thiserror::Error;

/// Error type for scanner configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A symbol with empty text
    #[error("symbol #{index} has empty text")]
    EmptySymbol { index: usize },

    /// The same symbol text registered twice
    ///
    /// Two equal-length matches for the same input can only come from a
    /// duplicated entry, so rejecting duplicates keeps longest-match
    /// resolution deterministic.
    #[error("symbol {text:?} registered twice (entries #{first} and #{second})")]
    DuplicateSymbol {
        text: String,
        first: usize,
        second: usize,
    },

    /// A keyword with empty text
    #[error("keyword #{index} is empty")]
    EmptyKeyword { index: usize },

    /// A keyword that can never match because it is not identifier-shaped
    #[error("keyword {word:?} is not an identifier (letter or '_' followed by letters, digits or '_')")]
    KeywordNotIdentifier { word: String },

    /// An empty line-comment prefix or block-comment delimiter
    #[error("comment delimiter for {which} is empty")]
    EmptyCommentDelimiter { which: &'static str },

    /// A nesting block comment whose opener and closer are the same text
    #[error("nested block comment uses {delimiter:?} as both opener and closer")]
    NestedSymmetricComment { delimiter: String },

    /// A level fill byte equal to the last byte of a block comment delimiter
    #[error("level fill {fill:?} is also the last byte of a block comment delimiter")]
    LevelFillConflict { fill: char },

    /// A symbol starting with a quote byte, which would hide the literal rule
    #[error("symbol {text:?} starts with quote character {quote:?} and would shadow string scanning")]
    QuoteShadowed { text: String, quote: char },

    /// A keyword or literal kind equal to end-of-input or invalid
    #[error("{owner} uses reserved kind {kind}")]
    ReservedKind { owner: String, kind: i32 },

    /// A language preset name that is not known
    #[error("unknown language {name:?}")]
    UnknownLanguage { name: String },
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
