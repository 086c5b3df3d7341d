//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - `.env` loading (see `main()`); the outcome is passed in.

use anyhow::Result;
use envdefaults::LoadReport;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
///
/// `report` is `None` when `.env` loading was skipped with `--no-dotenv`.
pub(crate) fn run_command(cli: Cli, report: Option<LoadReport>) -> Result<()> {
    match cli.command {
        Commands::Check => commands::check::run(report.as_ref()),
        Commands::Get {
            name,
            kind,
            default,
            description,
        } => commands::get::run(&name, kind, default.as_deref(), description),
        Commands::Describe { definitions } => commands::describe::run(&definitions),
    }
}
