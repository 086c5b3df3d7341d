//! Report which `.env` files were applied.
//!
//! Responsibilities:
//! - Print one line per applied file with its origin and assignment count.
//!
//! Invariants:
//! - Values are never printed; only paths and counts.

use anyhow::Result;
use envdefaults::LoadReport;

/// Print the load report to stdout.
pub fn run(report: Option<&LoadReport>) -> Result<()> {
    let Some(report) = report else {
        println!(".env loading skipped (--no-dotenv)");
        return Ok(());
    };

    if report.disabled {
        println!(".env loading disabled (DOTENV_DISABLED)");
        return Ok(());
    }

    if report.is_empty() {
        println!("No .env files found");
        return Ok(());
    }

    for file in &report.files {
        println!(
            "{:<5}  {}  ({} assignments)",
            file.origin,
            file.path.display(),
            file.assignments
        );
    }
    Ok(())
}
