//! Command trait for the flext CLI.
//!
//! Every subcommand is a [`Command`]; [`run`] is the single place that
//! constructs and executes one.

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that all flext commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command: Sized {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance from its arguments and the loaded
    /// configuration.
    fn new(args: Self::Args, config: Config) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Construct and execute a command.
pub fn run<C: Command>(args: C::Args, config: Config) -> Result<C::Output> {
    tracing::debug!(command = C::name(), "running command");
    C::new(args, config).execute()
}
