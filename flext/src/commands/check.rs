//! Check command implementation.
//!
//! Scans files in parallel and reports every invalid token with the
//! offending source line. The command fails when any invalid token is found
//! or any file cannot be read.

use std::path::{Path, PathBuf};
use std::time::Instant;

use flexer_lex::Lexer;
use flexer_util::SourceFile;
use rayon::prelude::*;

use crate::commands::common::{
    error_messages, output_messages, read_source, require_inputs, ScanOptions, Scanner,
};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{FlextError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Files to scan.
    pub files: Vec<PathBuf>,
    /// Scanner selection.
    pub scan: ScanOptions,
    /// Number of parallel jobs, overriding `[check] jobs`.
    pub jobs: Option<u32>,
}

/// Totals for one check run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// Files scanned successfully.
    pub files_checked: usize,
    /// Files that could not be read.
    pub files_failed: usize,
    /// Invalid tokens across all scanned files.
    pub invalid_tokens: usize,
}

impl CheckSummary {
    /// Whether the run found nothing to report.
    pub fn is_clean(&self) -> bool {
        self.files_failed == 0 && self.invalid_tokens == 0
    }
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    config: Config,
}

impl CheckCommand {
    /// Execute the command.
    pub fn run(&self) -> Result<CheckSummary> {
        let start_time = Instant::now();
        require_inputs(&self.args.files)?;
        let jobs = self.job_count()?;
        let scanner = Scanner::resolve(&self.args.scan, &self.config.language)?;

        let reports = self.scan_all(&scanner, jobs)?;
        let summary = print_reports(&self.args.files, reports);

        tracing::debug!(
            files = summary.files_checked,
            invalid = summary.invalid_tokens,
            jobs,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "check finished"
        );
        check_for_failures(&summary)?;
        Ok(summary)
    }

    /// Effective job count: the flag, else the configuration.
    fn job_count(&self) -> Result<usize> {
        let jobs = self.args.jobs.unwrap_or(self.config.check.jobs);
        if jobs == 0 {
            return Err(FlextError::Validation(error_messages::ZERO_JOBS.to_string()));
        }
        Ok(jobs as usize)
    }

    /// Scan every file on a dedicated pool, keeping input order.
    fn scan_all(&self, scanner: &Scanner, jobs: usize) -> Result<Vec<Result<Vec<String>>>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .map_err(|e| {
                FlextError::CommandExecution(format!("Failed to start thread pool: {}", e))
            })?;

        Ok(pool.install(|| {
            self.args
                .files
                .par_iter()
                .map(|path| check_file(path, scanner))
                .collect()
        }))
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CheckSummary;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Scan one file and render a report for each invalid token.
pub fn check_file(path: &Path, scanner: &Scanner) -> Result<Vec<String>> {
    let content = read_source(path)?;
    let file = SourceFile::new(path.display().to_string(), content);

    let reports = Lexer::new(file.content(), scanner.config())
        .filter(|token| token.is_invalid())
        .map(|token| {
            format!(
                "{}:{}: invalid token\n{}",
                file.name(),
                token.position,
                file.format_span(token.span, token.position)
            )
        })
        .collect();
    Ok(reports)
}

/// Print reports in input order and total them up.
fn print_reports(files: &[PathBuf], reports: Vec<Result<Vec<String>>>) -> CheckSummary {
    let mut summary = CheckSummary::default();

    for (path, report) in files.iter().zip(reports) {
        match report {
            Ok(diagnostics) => {
                summary.files_checked += 1;
                summary.invalid_tokens += diagnostics.len();
                for diagnostic in diagnostics {
                    println!("{}", diagnostic);
                }
            },
            Err(e) => {
                summary.files_failed += 1;
                eprintln!(
                    "{} Failed to check {}: {}",
                    output_messages::ERROR,
                    path.display(),
                    e
                );
            },
        }
    }

    summary
}

/// Turn a dirty summary into an error so the process exits non-zero.
fn check_for_failures(summary: &CheckSummary) -> Result<()> {
    if summary.is_clean() {
        return Ok(());
    }
    Err(FlextError::Validation(format!(
        "{} invalid token(s) in {} file(s), {} file(s) failed",
        summary.invalid_tokens, summary.files_checked, summary.files_failed
    )))
}
