//! Error types for `.env` loading and registration.
//!
//! Responsibilities:
//! - Define the per-file `DotenvError` produced while applying one `.env` file.
//! - Define `ConfigError`, the crate-level error that tells the user file and the
//!   local file apart so callers can name the file to fix.
//!
//! Does NOT handle:
//! - Accessor parse failures. Those never surface as errors; the accessor falls
//!   through to the registered default or the zero value.
//!
//! Invariants:
//! - Parse errors carry a 1-based line number.
//! - Only environment write failures echo the key and value, since the platform
//!   rejected exactly that pair.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::types::SettingKind;

/// Failure while applying a single `.env` file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DotenvError {
    /// The file exists but could not be read (permissions, invalid UTF-8, ...).
    #[error("failed to read file: {kind}")]
    Io { kind: ErrorKind },

    /// A non-blank line has no `=`.
    #[error("unable to parse line {line}: expected KEY=VALUE")]
    MissingSeparator { line: usize },

    /// The key or the value is empty after trimming.
    #[error("invalid environment variable assignment on line {line}: key and value must not be empty")]
    EmptyAssignment { line: usize },

    /// The platform refused to store the variable.
    #[error("failed to assign {key} value {value} (line {line}): {reason}")]
    EnvWrite {
        key: String,
        value: String,
        line: usize,
        reason: String,
    },
}

impl DotenvError {
    /// Line the failure occurred on, if it is tied to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            DotenvError::Io { .. } => None,
            DotenvError::MissingSeparator { line }
            | DotenvError::EmptyAssignment { line }
            | DotenvError::EnvWrite { line, .. } => Some(*line),
        }
    }
}

/// Errors raised by this crate.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The `.env` file in the user's home directory is invalid.
    #[error("unable to parse $HOME/.env file at {}: {source}", path.display())]
    UserEnvFile { path: PathBuf, source: DotenvError },

    /// The `.env` file in the working directory is invalid.
    #[error("unable to parse .env file at {}: {source}", path.display())]
    LocalEnvFile { path: PathBuf, source: DotenvError },

    /// A setting was registered without a name.
    #[error("setting name must not be empty")]
    EmptySettingName,

    /// A textual default could not be coerced to the requested kind.
    #[error("invalid default for {kind} setting: '{value}'")]
    InvalidDefault { kind: SettingKind, value: String },
}

impl ConfigError {
    /// The underlying file error, for the two load variants.
    pub fn dotenv_error(&self) -> Option<&DotenvError> {
        match self {
            ConfigError::UserEnvFile { source, .. } | ConfigError::LocalEnvFile { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}
