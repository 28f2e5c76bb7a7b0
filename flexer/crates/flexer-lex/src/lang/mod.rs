//! Ready-made configurations for concrete languages.
//!
//! Each preset module exposes its token kinds as constants, a `config()`
//! constructor, and a `kind_name()` lookup for display. [`Language`] selects
//! a preset by name.
//!
//! # Example
//!
//! ```
//! use flexer_lex::lang::Language;
//! use flexer_lex::tokenize;
//!
//! let language: Language = "lua".parse().unwrap();
//! let config = language.config().unwrap();
//! let tokens = tokenize("local x = 1", &config);
//!
//! assert_eq!(language.kind_name(tokens[0].kind), Some("local"));
//! assert_eq!(language.kind_name(tokens[1].kind), Some("NAME"));
//! ```

pub mod c;
pub mod lua;
pub mod python;

use std::fmt;
use std::str::FromStr;

use flexer_util::{ConfigError, ConfigResult};

use crate::config::LexerConfig;
use crate::token::TokenKind;

/// The built-in presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    /// Lua 5.4.
    Lua,
    /// A small Python-like language.
    Python,
    /// C-like syntax.
    C,
}

impl Language {
    /// Every preset, in display order.
    pub const ALL: [Language; 3] = [Language::Lua, Language::Python, Language::C];

    /// The preset's lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Language::Lua => "lua",
            Language::Python => "python",
            Language::C => "c",
        }
    }

    /// Builds the preset's configuration.
    pub fn config(self) -> ConfigResult<LexerConfig> {
        match self {
            Language::Lua => lua::config(),
            Language::Python => python::config(),
            Language::C => c::config(),
        }
    }

    /// Display name of a kind produced by this preset.
    pub fn kind_name(self, kind: TokenKind) -> Option<&'static str> {
        match self {
            Language::Lua => lua::kind_name(kind),
            Language::Python => python::kind_name(kind),
            Language::C => c::kind_name(kind),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lua" => Ok(Language::Lua),
            "python" | "py" => Ok(Language::Python),
            "c" => Ok(Language::C),
            _ => Err(ConfigError::UnknownLanguage {
                name: s.to_string(),
            }),
        }
    }
}

/// Names the reserved kinds, then looks `kind` up in a preset's keyword and
/// symbol tables. Skip symbols share the end-of-input value and are never
/// named.
fn lookup_name(
    kind: TokenKind,
    keywords: &[(&'static str, TokenKind)],
    symbols: &[(&'static str, TokenKind)],
) -> Option<&'static str> {
    match kind {
        TokenKind::EOF => Some("EOF"),
        TokenKind::INVALID => Some("INVALID"),
        _ => keywords
            .iter()
            .chain(symbols)
            .find(|(_, k)| *k == kind)
            .map(|(name, _)| *name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("lua".parse::<Language>().unwrap(), Language::Lua);
        assert_eq!("Python".parse::<Language>().unwrap(), Language::Python);
        assert_eq!("py".parse::<Language>().unwrap(), Language::Python);
        assert_eq!("C".parse::<Language>().unwrap(), Language::C);
        assert_eq!(
            "cobol".parse::<Language>().unwrap_err(),
            ConfigError::UnknownLanguage {
                name: "cobol".to_string()
            }
        );
    }

    #[test]
    fn test_name_round_trips() {
        for language in Language::ALL {
            assert_eq!(language.name().parse::<Language>().unwrap(), language);
            assert_eq!(language.to_string(), language.name());
        }
    }

    #[test]
    fn test_every_preset_builds() {
        for language in Language::ALL {
            assert!(language.config().is_ok(), "{} preset failed to build", language);
        }
    }

    #[test]
    fn test_reserved_kind_names() {
        for language in Language::ALL {
            assert_eq!(language.kind_name(TokenKind::EOF), Some("EOF"));
            assert_eq!(language.kind_name(TokenKind::INVALID), Some("INVALID"));
        }
    }
}
