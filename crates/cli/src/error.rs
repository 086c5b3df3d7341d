//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfigError` variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - A broken `$HOME/.env` and a broken `./.env` never share an exit code.

use envdefaults::ConfigError;

/// Structured exit codes for envdefaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// The `.env` file in the home directory is invalid.
    ///
    /// Scripts should point the user at `$HOME/.env`.
    UserEnvFile = 2,

    /// The `.env` file in the working directory is invalid.
    LocalEnvFile = 3,

    /// Invalid input - unknown kind, malformed definition, bad default.
    ///
    /// Scripts should fix the arguments and not retry the same call.
    InvalidInput = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::UserEnvFile { .. } => ExitCode::UserEnvFile,
            ConfigError::LocalEnvFile { .. } => ExitCode::LocalEnvFile,
            ConfigError::EmptySettingName | ConfigError::InvalidDefault { .. } => {
                ExitCode::InvalidInput
            }
        }
    }
}

/// Errors raised while interpreting command-line input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("invalid definition '{0}': expected NAME=KIND:VALUE[::DESCRIPTION]")]
    MalformedDefinition(String),

    #[error(transparent)]
    UnknownKind(#[from] envdefaults::UnknownKind),
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if nothing in the chain is recognised.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
            if cause.downcast_ref::<InputError>().is_some() {
                return ExitCode::InvalidInput;
            }
        }

        ExitCode::GeneralError
    }
}
