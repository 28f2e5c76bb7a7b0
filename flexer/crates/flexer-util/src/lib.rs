//! flexer-util - Core Utilities and Foundation Types
//!
//! Location types shared by the scanner and the tools built on it, plus the
//! configuration error type.
//!
//! - [`span`] - [`SourceSpan`], [`Position`], and [`SourceFile`]
//! - [`error`] - [`ConfigError`] and its result alias

pub mod error;
pub mod span;

pub use error::{ConfigError, ConfigResult};
pub use span::{Position, SourceFile, SourceSpan};

// Re-export commonly used types
pub use rustc_hash::FxHashMap;
