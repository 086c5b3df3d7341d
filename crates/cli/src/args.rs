//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load `.env` files (see `main()`).

use clap::{Parser, Subcommand};
use envdefaults::SettingKind;

#[derive(Parser)]
#[command(name = "envdefaults")]
#[command(about = "Inspect .env overlays and resolve settings", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envdefaults check\n  envdefaults get MAX_CONNS --kind int --default 10\n  envdefaults get TIMEOUT -k duration -d 5s\n  envdefaults describe -D 'PORT=int:8080::Listen port' -D 'DEBUG=bool:false'\n"
)]
pub struct Cli {
    /// Do not load $HOME/.env or ./.env before running the command
    #[arg(long, global = true)]
    pub no_dotenv: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the .env files and report which ones were applied
    Check,

    /// Resolve a single setting and print its effective value
    Get {
        /// Environment variable name
        name: String,

        /// Kind to resolve as (string, string-list, int, int64, float, bool, duration)
        #[arg(short, long, default_value = "string")]
        kind: SettingKind,

        /// Default used when the variable is unset or does not parse
        #[arg(short, long, allow_hyphen_values = true)]
        default: Option<String>,

        /// Description recorded with the default
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Print the help table for a set of setting definitions
    Describe {
        /// Setting definition, repeatable
        #[arg(
            short = 'D',
            long = "define",
            value_name = "NAME=KIND:VALUE[::DESCRIPTION]",
            allow_hyphen_values = true
        )]
        definitions: Vec<String>,
    },
}
