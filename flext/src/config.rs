//! Configuration module for the flext CLI.
//!
//! This module handles loading, saving, and managing configuration
//! settings for the flext application, including user-defined scanner
//! tables.

use dirs::{config_dir, home_dir};
use indexmap::IndexMap;
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{FlextError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "flext.toml";

/// Fallback job count when the CPU count does not fit.
const DEFAULT_THREAD_COUNT: u32 = 4;

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Token listing options.
    #[serde(default)]
    pub output: OutputConfig,

    /// Check command options.
    #[serde(default)]
    pub check: CheckConfig,

    /// Which scanner to run.
    #[serde(default)]
    pub language: LanguageConfig,
}

/// Options for `flext tokens`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// `text` or `json`.
    #[serde(default = "default_format")]
    pub format: String,

    /// Print parsed literal values.
    #[serde(default)]
    pub show_values: bool,
}

/// Options for `flext check`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckConfig {
    /// Number of files scanned in parallel.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: u32,
}

/// Scanner selection: a preset name, optionally replaced by custom tables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LanguageConfig {
    /// Preset name (`lua`, `python`, `c`).
    #[serde(default = "default_preset")]
    pub preset: String,

    /// Custom tables; when present they are used instead of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tables: Option<TablesConfig>,
}

/// User-defined scanner tables.
///
/// Kinds are plain integers. Values below 256 are conventionally the ASCII
/// code of a one-byte symbol, `0` marks a symbol that is skipped, and
/// custom kinds start at 260.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TablesConfig {
    /// Line comment prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_comment: Option<String>,

    /// Block comment delimiters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_comment: Option<BlockCommentConfig>,

    /// Bytes opening string literals; the scanner default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_quotes: Option<String>,

    /// Bytes opening character literals; the scanner default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_quotes: Option<String>,

    /// Symbol text to kind, in declaration order.
    #[serde(default)]
    pub symbols: IndexMap<String, i32>,

    /// Keyword text to kind, in declaration order.
    #[serde(default)]
    pub keywords: IndexMap<String, i32>,
}

/// Block comment delimiters as written in the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlockCommentConfig {
    /// Opening delimiter.
    pub start: String,
    /// Closing delimiter.
    pub end: String,
    /// Whether comments nest.
    #[serde(default)]
    pub nested: bool,
}

fn default_format() -> String {
    "text".to_string()
}

fn default_preset() -> String {
    "lua".to_string()
}

/// Default number of parallel jobs, from the CPU count.
fn default_parallel_jobs() -> u32 {
    get_num_cpus().try_into().unwrap_or(DEFAULT_THREAD_COUNT)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            output: OutputConfig::default(),
            check: CheckConfig::default(),
            language: LanguageConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            show_values: false,
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            jobs: default_parallel_jobs(),
        }
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            tables: None,
        }
    }
}

impl TablesConfig {
    /// Load a standalone tables file, shaped like `[language.tables]`.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = read_config_text(path)?;
        toml::from_str(&content)
            .map_err(|e| FlextError::Config(format!("Failed to parse tables: {}", e)))
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/flext/`
    /// 3. Platform configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = read_config_text(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            FlextError::Config(format!("Failed to parse configuration: {}", e))
        })?;

        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| FlextError::Config(format!("Failed to serialize configuration: {}", e)))
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("flext").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("flext").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

fn read_config_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(FlextError::Config(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }
    Ok(std::fs::read_to_string(path)?)
}
