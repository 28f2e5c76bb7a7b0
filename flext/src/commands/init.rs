//! Init command implementation.
//!
//! Writes a starter `flext.toml` holding the default settings and a
//! commented-out example of custom scanner tables.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::commands::common::{error_messages, output_messages};
use crate::commands::traits::Command;
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{FlextError, Result};

/// Example tables appended to the starter file.
const TABLES_EXAMPLE: &str = r##"
# Uncomment to scan with custom tables instead of the preset above.
# Kinds below 256 are ASCII codes, 0 skips the match, custom kinds start at 260.
#
# [language.tables]
# line_comment = "#"
# block_comment = { start = "/*", end = "*/", nested = true }
# string_quotes = "\""
# char_quotes = "'"
#
# [language.tables.symbols]
# "=" = 61
# "==" = 300
# "(" = 40
# ")" = 41
#
# [language.tables.keywords]
# "let" = 260
# "in" = 261
"##;

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Overwrite an existing configuration file.
    pub force: bool,
    /// Directory to initialize (default: current directory).
    pub path: Option<PathBuf>,
}

/// Init command handler.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    /// Execute the command, returning the path of the written file.
    pub fn run(&self) -> Result<PathBuf> {
        let target_path = self.get_target_path();

        self.validate_directory(&target_path)?;
        let config_path = self.create_config_file(&target_path)?;

        tracing::info!(
            "{} {}",
            output_messages::CREATED_FILE,
            config_path.display()
        );
        Ok(config_path)
    }

    /// Get the target directory for initialization.
    fn get_target_path(&self) -> PathBuf {
        self.args
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Create the target directory if needed and reject non-directories.
    fn validate_directory(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::create_dir_all(path)?;
            tracing::debug!("{} {}", output_messages::CREATED_DIR, path.display());
            return Ok(());
        }

        if !path.is_dir() {
            return Err(FlextError::Validation(format!(
                "{} {}",
                error_messages::TARGET_NOT_DIR,
                path.display()
            )));
        }

        Ok(())
    }

    /// Write the configuration file.
    fn create_config_file(&self, path: &Path) -> Result<PathBuf> {
        let config_path = path.join(CONFIG_FILE_NAME);

        if config_path.exists() && !self.args.force {
            return Err(FlextError::Validation(format!(
                "{} {}",
                error_messages::CONFIG_EXISTS,
                config_path.display()
            )));
        }

        Config::default().save_to_path(&config_path)?;
        let mut file = OpenOptions::new().append(true).open(&config_path)?;
        file.write_all(TABLES_EXAMPLE.as_bytes()).map_err(|e| {
            FlextError::FileOperation(format!(
                "Failed to write {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(config_path)
    }
}

impl Command for InitCommand {
    type Args = InitArgs;
    type Output = PathBuf;

    fn new(args: Self::Args, _config: Config) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "init"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn init(path: &Path, force: bool) -> Result<PathBuf> {
        let args = InitArgs {
            force,
            path: Some(path.to_path_buf()),
        };
        InitCommand::new(args, Config::default()).run()
    }

    #[test]
    fn test_init_args_default() {
        let args = InitArgs::default();
        assert!(!args.force);
        assert!(args.path.is_none());
    }

    #[test]
    fn test_init_writes_loadable_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = init(temp_dir.path(), false).unwrap();

        assert_eq!(config_path, temp_dir.path().join("flext.toml"));
        let loaded = Config::load_from_path(&config_path).unwrap();
        assert_eq!(loaded.language.preset, "lua");
        assert!(loaded.language.tables.is_none());
    }

    #[test]
    fn test_init_example_tables_parse_when_uncommented() {
        let uncommented = TABLES_EXAMPLE
            .lines()
            .skip_while(|line| !line.starts_with("# [language.tables]"))
            .map(|line| line.trim_start_matches('#').trim_start())
            .collect::<Vec<_>>()
            .join("\n");

        let config: Config = toml::from_str(&uncommented).unwrap();
        let tables = config.language.tables.unwrap();
        assert_eq!(tables.symbols.get("=="), Some(&300));
        assert_eq!(tables.keywords.get("let"), Some(&260));
        assert!(tables.block_comment.unwrap().nested);
    }

    #[test]
    fn test_init_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("project");

        init(&target, false).unwrap();
        assert!(target.join("flext.toml").exists());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        init(temp_dir.path(), false).unwrap();

        let result = init(temp_dir.path(), false);
        if let Err(FlextError::Validation(msg)) = result {
            assert!(msg.contains("already exists"));
        } else {
            panic!("Expected Validation error");
        }
    }

    #[test]
    fn test_init_force_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("flext.toml"), "garbage = [").unwrap();

        init(temp_dir.path(), true).unwrap();
        assert!(Config::load_from_path(&temp_dir.path().join("flext.toml")).is_ok());
    }

    #[test]
    fn test_init_rejects_file_target() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("not_a_dir");
        std::fs::write(&file, "").unwrap();

        assert!(matches!(init(&file, false), Err(FlextError::Validation(_))));
    }

    #[test]
    fn test_init_command_name() {
        assert_eq!(<InitCommand as Command>::name(), "init");
    }
}
