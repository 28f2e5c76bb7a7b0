//! Command modules for the flext CLI.
//!
//! Each subcommand lives in its own file and implements
//! [`traits::Command`].

pub mod common;
pub mod traits;

pub mod check;
pub mod init;
pub mod tokens;

// Re-export command types
pub use check::{CheckArgs, CheckCommand};
pub use init::{InitArgs, InitCommand};
pub use tokens::{TokensArgs, TokensCommand};
