//! Common types and utilities for flext commands.
//!
//! This module provides the scanner selection shared by `tokens` and
//! `check`, kind labelling, file reading, and the message templates used
//! across all command implementations.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use flexer_lex::lang::Language;
use flexer_lex::{LexerConfig, TokenKind};
use flexer_util::FxHashMap;

use crate::config::{LanguageConfig, TablesConfig};
use crate::error::{FlextError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported token listing formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One tab-separated line per token.
    Text,
    /// One JSON object per line.
    Json,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" | "jsonl" => Some(Self::Json),
            _ => None,
        }
    }
}

// ============================================================================
// Scanner Selection
// ============================================================================

/// Scanner options given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Preset overriding the configuration file.
    pub language: Option<Language>,
    /// Tables file overriding both the preset and the configuration file.
    pub tables: Option<PathBuf>,
}

/// A built scanner configuration plus the names used to display its kinds.
#[derive(Debug)]
pub struct Scanner {
    config: LexerConfig,
    labels: KindLabels,
}

impl Scanner {
    /// Resolve the scanner to run.
    ///
    /// Precedence: `--tables`, then `--lang`, then `[language.tables]`, then
    /// `[language] preset`.
    pub fn resolve(options: &ScanOptions, language: &LanguageConfig) -> Result<Self> {
        if let Some(path) = &options.tables {
            let tables = TablesConfig::load_from_path(path)?;
            return Self::from_tables(&tables);
        }
        if let Some(preset) = options.language {
            return Self::from_preset(preset);
        }
        if let Some(tables) = &language.tables {
            return Self::from_tables(tables);
        }
        Self::from_preset(language.preset.parse()?)
    }

    /// Scanner for a built-in preset.
    pub fn from_preset(language: Language) -> Result<Self> {
        tracing::debug!(%language, "using preset");
        Ok(Self {
            config: language.config()?,
            labels: KindLabels::Preset(language),
        })
    }

    /// Scanner for user-defined tables.
    pub fn from_tables(tables: &TablesConfig) -> Result<Self> {
        let mut builder = LexerConfig::builder()
            .symbols(tables.symbols.iter().map(|(text, &kind)| (text, TokenKind(kind))))
            .keywords(tables.keywords.iter().map(|(word, &kind)| (word, TokenKind(kind))));

        if let Some(prefix) = &tables.line_comment {
            builder = builder.line_comment(prefix);
        }
        if let Some(block) = &tables.block_comment {
            builder = builder.block_comment(&block.start, &block.end, block.nested);
        }
        if let Some(quotes) = &tables.string_quotes {
            builder = builder.string_quotes(quotes);
        }
        if let Some(quotes) = &tables.char_quotes {
            builder = builder.char_quotes(quotes);
        }

        tracing::debug!(
            symbols = tables.symbols.len(),
            keywords = tables.keywords.len(),
            "using custom tables"
        );
        Ok(Self {
            config: builder.build()?,
            labels: KindLabels::from_tables(tables),
        })
    }

    /// The scanner configuration.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Display label for a kind.
    pub fn label(&self, kind: TokenKind) -> Cow<'_, str> {
        self.labels.label(kind)
    }
}

/// Kind display names.
#[derive(Debug)]
enum KindLabels {
    Preset(Language),
    Custom(FxHashMap<i32, String>),
}

impl KindLabels {
    /// Later table entries never shadow earlier ones with the same kind.
    fn from_tables(tables: &TablesConfig) -> Self {
        let mut names = FxHashMap::default();
        for (text, &kind) in tables.keywords.iter().chain(&tables.symbols) {
            if kind != TokenKind::SKIP.0 {
                names.entry(kind).or_insert_with(|| text.clone());
            }
        }
        Self::Custom(names)
    }

    fn label(&self, kind: TokenKind) -> Cow<'_, str> {
        let named = match self {
            Self::Preset(language) => language.kind_name(kind).map(Cow::Borrowed),
            Self::Custom(names) => names.get(&kind.0).map(|s| Cow::Borrowed(s.as_str())),
        };
        named.unwrap_or_else(|| Cow::Owned(generic_label(kind)))
    }
}

/// Label for a kind no table names.
fn generic_label(kind: TokenKind) -> String {
    match kind {
        TokenKind::IDENTIFIER => "IDENT".to_string(),
        TokenKind::NUMBER => "NUMBER".to_string(),
        TokenKind::STRING => "STRING".to_string(),
        TokenKind::CHAR => "CHAR".to_string(),
        other => other.to_string(),
    }
}

// ============================================================================
// File Utilities
// ============================================================================

/// Read a source file, rejecting missing paths and directories up front.
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(FlextError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(FlextError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }
    std::fs::read(path).map_err(|e| {
        FlextError::FileOperation(format!("Failed to read {}: {}", path.display(), e))
    })
}

/// Fail when no input files were given.
pub fn require_inputs(files: &[PathBuf]) -> Result<()> {
    if files.is_empty() {
        return Err(FlextError::Validation(
            error_messages::NO_INPUT_FILES.to_string(),
        ));
    }
    Ok(())
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message prefixes, followed by the offending value.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when target path is not a directory.
    pub const TARGET_NOT_DIR: &str = "Target path is not a directory:";

    /// Error when the configuration file already exists.
    pub const CONFIG_EXISTS: &str = "Configuration file already exists:";

    /// Error when an unknown format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format:";

    /// Error when config has invalid format.
    pub const INVALID_CONFIG_FORMAT: &str = "Invalid format in configuration:";

    /// Error when jobs is zero.
    pub const ZERO_JOBS: &str = "Job count must be at least 1";
}

// ============================================================================
// Output Messages
// ============================================================================

/// Standard output message prefixes.
pub mod output_messages {
    /// Generic error message prefix.
    pub const ERROR: &str = "❌";

    /// Message when a file is created.
    pub const CREATED_FILE: &str = "✅ Created file:";

    /// Message when a directory is created.
    pub const CREATED_DIR: &str = "✅ Created directory:";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlockCommentConfig;
    use flexer_lex::tokenize;
    use indexmap::IndexMap;

    fn tables() -> TablesConfig {
        let mut symbols = IndexMap::new();
        symbols.insert("=".to_string(), 61);
        symbols.insert("==".to_string(), 300);
        symbols.insert("\\\n".to_string(), 0);
        let mut keywords = IndexMap::new();
        keywords.insert("let".to_string(), 260);

        TablesConfig {
            line_comment: Some("#".to_string()),
            block_comment: Some(BlockCommentConfig {
                start: "(*".to_string(),
                end: "*)".to_string(),
                nested: true,
            }),
            string_quotes: None,
            char_quotes: None,
            symbols,
            keywords,
        }
    }

    #[test]
    fn test_output_format_from_name() {
        assert_eq!(OutputFormat::from_name("TEXT"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::from_name("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_name("xml"), None);
    }

    #[test]
    fn test_scanner_from_tables() {
        let scanner = Scanner::from_tables(&tables()).unwrap();
        let tokens = tokenize("let x == (* (* *) *) 1 # done", scanner.config());
        let labels: Vec<_> = tokens.iter().map(|t| scanner.label(t.kind)).collect();
        assert_eq!(labels, vec!["let", "IDENT", "==", "NUMBER"]);
    }

    #[test]
    fn test_scanner_rejects_bad_tables() {
        let mut bad = tables();
        bad.keywords.insert("2fast".to_string(), 261);
        assert!(matches!(Scanner::from_tables(&bad), Err(FlextError::Tables(_))));
    }

    #[test]
    fn test_scanner_rejects_reserved_keyword_kind() {
        let mut bad = tables();
        bad.keywords.insert("stop".to_string(), 0);
        let err = Scanner::from_tables(&bad).err().unwrap();
        assert!(err.to_string().contains("reserved kind 0"));
    }

    #[test]
    fn test_resolve_precedence() {
        let language = LanguageConfig {
            preset: "python".to_string(),
            tables: Some(tables()),
        };

        let from_tables = Scanner::resolve(&ScanOptions::default(), &language).unwrap();
        assert!(matches!(from_tables.labels, KindLabels::Custom(_)));

        let options = ScanOptions {
            language: Some(Language::C),
            tables: None,
        };
        let from_flag = Scanner::resolve(&options, &language).unwrap();
        assert!(matches!(from_flag.labels, KindLabels::Preset(Language::C)));
    }

    #[test]
    fn test_resolve_unknown_preset() {
        let language = LanguageConfig {
            preset: "cobol".to_string(),
            tables: None,
        };
        let result = Scanner::resolve(&ScanOptions::default(), &language);
        assert!(matches!(result, Err(FlextError::Tables(_))));
    }

    #[test]
    fn test_generic_labels() {
        let scanner = Scanner::from_tables(&TablesConfig::default()).unwrap();
        assert_eq!(scanner.label(TokenKind::STRING), "STRING");
        assert_eq!(scanner.label(TokenKind::punct(b'+')), "'+'");
        assert_eq!(scanner.label(TokenKind::INVALID), "INVALID");
    }

    #[test]
    fn test_read_source_missing() {
        let result = read_source(Path::new("/nonexistent/input.lua"));
        assert!(matches!(result, Err(FlextError::Validation(msg)) if msg.contains("does not exist")));
    }
}
