//! Lexer module.
//!
//! This module organizes the scan loop into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `comment` - Line and block comment skipping
//! - `symbol` - Longest-match symbol resolution
//! - `identifier` - Identifier and keyword lexing
//! - `literal` - Number, string and character literal dispatch

mod comment;
mod core;
mod identifier;
mod literal;
mod symbol;

pub use core::{tokenize, Lexer};
