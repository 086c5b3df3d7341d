//! `.env` file loading.
//!
//! Responsibilities:
//! - Locate the user (`$HOME/.env`) and local (`./.env`) override files.
//! - Apply their assignments, in that order, to the process environment or any
//!   other `EnvTarget`.
//! - Honour the `DOTENV_DISABLED` gate when the caller opts in.
//!
//! Does NOT handle:
//! - Typed lookups (see settings.rs).
//!
//! Invariants / Assumptions:
//! - `.env` values override existing variables; the local file overrides the user file.
//! - A missing file is not an error. A file that fails stops loading and is
//!   reported by origin; assignments applied before the failure stay applied.

mod builder;
mod error;
mod parse;

#[cfg(test)]
mod tests;

pub use builder::{AppliedFile, DotenvLoader, EnvFileOrigin, LoadReport};
pub use error::{ConfigError, DotenvError};
pub use parse::parse_line;
