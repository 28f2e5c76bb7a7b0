//! Error handling module for the flext CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use flexer_util::ConfigError;
use thiserror::Error;

/// Main error type for the flext CLI application.
///
/// This enum represents all possible errors that can occur
/// during the execution of flext commands.
#[derive(Error, Debug)]
pub enum FlextError {
    /// Error when a configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when file operations fail.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a command execution fails.
    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    /// Error when the scanner tables or preset name are rejected.
    #[error("Lexer configuration error: {0}")]
    Tables(#[from] ConfigError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using FlextError.
pub type Result<T> = std::result::Result<T, FlextError>;
