//! Tokens command implementation.
//!
//! Scans each input file and prints one line per token, either as
//! tab-separated text (`line:col`, kind, text, and optionally the value) or
//! as JSON lines.

use std::borrow::Cow;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use flexer_lex::{Lexer, NumericValue, Token};
use serde::Serialize;

use crate::commands::common::{
    error_messages, read_source, require_inputs, OutputFormat, ScanOptions, Scanner,
};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{FlextError, Result};

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Files to scan.
    pub files: Vec<PathBuf>,
    /// Scanner selection.
    pub scan: ScanOptions,
    /// Output format name, overriding `[output] format`.
    pub format: Option<String>,
    /// Print literal values in text output.
    pub values: bool,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
    config: Config,
}

impl TokensCommand {
    /// Execute the command, returning the number of tokens printed.
    pub fn run(&self) -> Result<usize> {
        require_inputs(&self.args.files)?;
        let format = self.output_format()?;
        let show_values = self.args.values || self.config.output.show_values;
        let scanner = Scanner::resolve(&self.args.scan, &self.config.language)?;

        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        let with_headers = format == OutputFormat::Text && self.args.files.len() > 1;

        let mut total = 0;
        for path in &self.args.files {
            let source = read_source(path)?;
            if with_headers {
                writeln!(out, "==> {} <==", path.display())?;
            }
            total += write_tokens(&mut out, path, &source, &scanner, format, show_values)?;
        }
        out.flush()?;

        tracing::debug!(files = self.args.files.len(), tokens = total, "listed tokens");
        Ok(total)
    }

    /// Determine the output format from the flag or the configuration.
    fn output_format(&self) -> Result<OutputFormat> {
        if let Some(name) = &self.args.format {
            return OutputFormat::from_name(name).ok_or_else(|| {
                FlextError::Validation(format!("{} {}", error_messages::UNKNOWN_FORMAT, name))
            });
        }

        let name = &self.config.output.format;
        OutputFormat::from_name(name).ok_or_else(|| {
            FlextError::Config(format!("{} {}", error_messages::INVALID_CONFIG_FORMAT, name))
        })
    }
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = usize;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "tokens"
    }
}

/// One token as emitted in JSON output.
#[derive(Serialize)]
struct TokenRecord<'a> {
    file: Cow<'a, str>,
    line: u32,
    column: u32,
    offset: usize,
    len: usize,
    kind: i32,
    label: Cow<'a, str>,
    text: Cow<'a, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<serde_json::Value>,
}

fn json_value(value: NumericValue) -> serde_json::Value {
    match value {
        NumericValue::Signed(v) => v.into(),
        NumericValue::Unsigned(v) => v.into(),
        NumericValue::Float(v) => v.into(),
    }
}

/// Write every token of `source` to `out`, returning how many were written.
///
/// JSON records always carry the literal value when there is one;
/// `show_values` only affects text output.
pub fn write_tokens<W: Write>(
    out: &mut W,
    path: &Path,
    source: &[u8],
    scanner: &Scanner,
    format: OutputFormat,
    show_values: bool,
) -> Result<usize> {
    let file = path.to_string_lossy();
    let mut count = 0;

    for token in Lexer::new(source, scanner.config()) {
        match format {
            OutputFormat::Text => write_text_line(out, &token, source, scanner, show_values)?,
            OutputFormat::Json => {
                let record = TokenRecord {
                    file: Cow::Borrowed(file.as_ref()),
                    line: token.position.line,
                    column: token.position.column,
                    offset: token.span.offset,
                    len: token.span.len,
                    kind: token.kind.0,
                    label: scanner.label(token.kind),
                    text: String::from_utf8_lossy(token.text(source)),
                    value: token.value.map(json_value),
                };
                serde_json::to_writer(&mut *out, &record)?;
                writeln!(out)?;
            },
        }
        count += 1;
    }

    Ok(count)
}

fn write_text_line<W: Write>(
    out: &mut W,
    token: &Token,
    source: &[u8],
    scanner: &Scanner,
    show_values: bool,
) -> Result<()> {
    let text = String::from_utf8_lossy(token.text(source));
    write!(
        out,
        "{}\t{}\t{}",
        token.position,
        scanner.label(token.kind),
        text.escape_debug()
    )?;
    if let (true, Some(value)) = (show_values, token.value) {
        write!(out, "\t{}", value)?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexer_lex::lang::Language;
    use tempfile::TempDir;

    fn render(source: &str, language: Language, format: OutputFormat, values: bool) -> String {
        let scanner = Scanner::from_preset(language).unwrap();
        let mut out = Vec::new();
        write_tokens(
            &mut out,
            Path::new("t.src"),
            source.as_bytes(),
            &scanner,
            format,
            values,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_output() {
        let output = render("local x = 1", Language::Lua, OutputFormat::Text, false);
        assert_eq!(
            output,
            "1:1\tlocal\tlocal\n1:7\tNAME\tx\n1:9\t=\t=\n1:11\tNUMBER\t1\n"
        );
    }

    #[test]
    fn test_text_output_with_values() {
        let output = render("x = 0x10", Language::C, OutputFormat::Text, true);
        assert!(output.ends_with("1:5\tNUMBER\t0x10\t16\n"));
    }

    #[test]
    fn test_text_output_escapes_newlines() {
        let output = render("[[a\nb]]", Language::Lua, OutputFormat::Text, false);
        assert_eq!(output, "1:1\tSTRING\t[[a\\nb]]\n");
    }

    #[test]
    fn test_json_output() {
        let output = render("def f", Language::Python, OutputFormat::Json, false);
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["label"], "def");
        assert_eq!(lines[0]["file"], "t.src");
        assert_eq!(lines[1]["label"], "ID");
        assert_eq!(lines[1]["column"], 5);
        assert!(lines[1].get("value").is_none());
    }

    #[test]
    fn test_json_output_carries_values() {
        let output = render("2.5", Language::C, OutputFormat::Json, false);
        let record: serde_json::Value = serde_json::from_str(output.trim_end()).unwrap();
        assert_eq!(record["value"], 2.5);
    }

    #[test]
    fn test_tokens_command_missing_file() {
        let args = TokensArgs {
            files: vec![PathBuf::from("/nonexistent/file.lua")],
            ..TokensArgs::default()
        };
        let result = TokensCommand::new(args, Config::default()).run();
        assert!(matches!(result, Err(FlextError::Validation(_))));
    }

    #[test]
    fn test_tokens_command_unknown_format() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.lua");
        std::fs::write(&path, "x").unwrap();

        let args = TokensArgs {
            files: vec![path],
            format: Some("yaml".to_string()),
            ..TokensArgs::default()
        };
        let result = TokensCommand::new(args, Config::default()).run();
        assert!(matches!(result, Err(FlextError::Validation(msg)) if msg.contains("yaml")));
    }

    #[test]
    fn test_tokens_command_counts_tokens() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.lua");
        std::fs::write(&path, "return 1 + 2").unwrap();

        let args = TokensArgs {
            files: vec![path],
            ..TokensArgs::default()
        };
        assert_eq!(TokensCommand::new(args, Config::default()).run().unwrap(), 4);
    }

    #[test]
    fn test_tokens_command_name() {
        assert_eq!(<TokensCommand as Command>::name(), "tokens");
    }
}
