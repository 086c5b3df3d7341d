//! envdefaults - inspect `.env` overlays and resolve settings.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Load `$HOME/.env` and `./.env` into the process environment.
//! - Dispatch to the selected command and map failures to exit codes.
//!
//! Does NOT handle:
//! - Parsing or resolution rules (see the `envdefaults` library).
//!
//! Invariants:
//! - `.env` files are loaded before any command runs, unless `--no-dotenv` is given
//!   or `DOTENV_DISABLED` is `1` or `true`.
//! - A broken `.env` file exits with a code naming which file is at fault.
//! - Logs go to stderr so command output on stdout stays scriptable.

mod args;
mod commands;
mod dispatch;
mod error;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use envdefaults::DotenvLoader;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let report = if cli.no_dotenv {
        tracing::debug!("--no-dotenv given, skipping .env loading");
        None
    } else {
        match DotenvLoader::new().honor_disable_var(true).load() {
            Ok(report) => Some(report),
            Err(e) => {
                eprintln!("Failed to load environment: {}", e);
                eprintln!("Hint: set DOTENV_DISABLED=1 or pass --no-dotenv to skip .env loading");
                std::process::exit(ExitCode::from(&e).as_i32());
            }
        }
    };

    let exit_code = match run_command(cli, report) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
