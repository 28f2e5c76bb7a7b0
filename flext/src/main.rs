//! Flext CLI - a command-line front end for the flexer scanner.
//!
//! This is the main entry point for the flext CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use flexer_lex::lang::Language;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::ScanOptions;
use commands::traits::run;
use commands::{CheckArgs, CheckCommand, InitArgs, InitCommand, TokensArgs, TokensCommand};
use config::Config;
use error::{FlextError, Result};

/// Flext - scan source files with configurable lexer tables
///
/// Flext lists tokens, checks files for invalid input, and writes starter
/// configuration. Scanning uses a built-in language preset or custom
/// tables from a TOML file.
#[derive(Parser, Debug)]
#[command(name = "flext")]
#[command(author = "Flexer Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan source files with configurable lexer tables", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "FLEXT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "FLEXT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "FLEXT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the flext CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of one or more files
    ///
    /// Prints one line per token: position, kind, and source text. With
    /// `--format json` each line is a JSON object instead.
    Tokens(TokensCommandArgs),

    /// Report invalid tokens
    ///
    /// Scans files in parallel and prints every invalid token with its
    /// source line. Exits with an error when anything was reported.
    Check(CheckCommandArgs),

    /// Write a starter flext.toml
    Init(InitCommandArgs),
}

/// Scanner selection shared by `tokens` and `check`.
#[derive(Args, Debug)]
struct ScanFlags {
    /// Built-in language preset (lua, python, c)
    #[arg(short, long)]
    lang: Option<Language>,

    /// TOML file with custom tables (overrides --lang)
    #[arg(short, long)]
    tables: Option<PathBuf>,
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommandArgs {
    /// Files to scan
    #[arg(required = true)]
    files: Vec<PathBuf>,

    #[command(flatten)]
    scan: ScanFlags,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Show parsed literal values
    #[arg(long)]
    values: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommandArgs {
    /// Files to scan
    #[arg(required = true)]
    files: Vec<PathBuf>,

    #[command(flatten)]
    scan: ScanFlags,

    /// Number of parallel jobs
    #[arg(short, long)]
    jobs: Option<u32>,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommandArgs {
    /// Directory to write flext.toml into (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing flext.toml
    #[arg(short, long)]
    force: bool,
}

impl From<ScanFlags> for ScanOptions {
    fn from(flags: ScanFlags) -> Self {
        Self {
            language: flags.lang,
            tables: flags.tables,
        }
    }
}

/// Main entry point for the flext CLI.
///
/// Parses command-line arguments, loads configuration, initializes
/// logging, and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first so its verbose setting can raise the log level
    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;
    tracing::debug!(preset = %config.language.preset, "configuration loaded");

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with token output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| FlextError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, config),
        Commands::Check(args) => execute_check(args, config),
        Commands::Init(args) => execute_init(args, config),
    }
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommandArgs, config: Config) -> Result<()> {
    let tokens_args = TokensArgs {
        files: args.files,
        scan: args.scan.into(),
        format: args.format,
        values: args.values,
    };
    run::<TokensCommand>(tokens_args, config).map(|_| ())
}

/// Execute the check command.
fn execute_check(args: CheckCommandArgs, config: Config) -> Result<()> {
    let check_args = CheckArgs {
        files: args.files,
        scan: args.scan.into(),
        jobs: args.jobs,
    };
    run::<CheckCommand>(check_args, config).map(|_| ())
}

/// Execute the init command.
fn execute_init(args: InitCommandArgs, config: Config) -> Result<()> {
    let init_args = InitArgs {
        force: args.force,
        path: args.path,
    };
    run::<InitCommand>(init_args, config).map(|_| ())
}
