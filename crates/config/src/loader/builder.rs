//! `.env` loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `DotenvLoader` that resolves the user and local
//!   `.env` locations, with overrides for tests and embedding.
//! - Apply each present file line by line to an `EnvTarget`.
//! - Report which files were applied.
//!
//! Does NOT handle:
//! - Line syntax (delegated to parse.rs).
//!
//! Invariants / Assumptions:
//! - The user file is applied before the local file, so local values win.
//! - The `DOTENV_DISABLED` variable is consulted only when the caller opts in
//!   with `honor_disable_var`, and then before any file is touched.
//! - A path that is a directory counts as absent.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{ConfigError, DotenvError};
use super::parse::parse_line;
use crate::constants::DOTENV_FILE_NAME;
use crate::env::{EnvTarget, ProcessEnv, dotenv_disabled};

/// Which of the two override files an entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvFileOrigin {
    /// `$HOME/.env`
    User,
    /// `.env` in the working directory.
    Local,
}

impl fmt::Display for EnvFileOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            EnvFileOrigin::User => "user",
            EnvFileOrigin::Local => "local",
        })
    }
}

/// One file that was found and applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedFile {
    pub origin: EnvFileOrigin,
    pub path: PathBuf,
    /// Number of assignments the file contributed.
    pub assignments: usize,
}

/// Outcome of a successful load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Applied files, in application order.
    pub files: Vec<AppliedFile>,
    /// Whether loading was skipped because of an honoured `DOTENV_DISABLED`.
    pub disabled: bool,
}

impl LoadReport {
    pub fn total_assignments(&self) -> usize {
        self.files.iter().map(|f| f.assignments).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Loader for the user and local `.env` files.
#[derive(Debug, Clone)]
pub struct DotenvLoader {
    home_dir: Option<PathBuf>,
    working_dir: Option<PathBuf>,
    honor_disable_var: bool,
}

impl Default for DotenvLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DotenvLoader {
    /// Create a loader for `$HOME/.env` and `./.env`.
    pub fn new() -> Self {
        Self {
            home_dir: directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf()),
            working_dir: None,
            honor_disable_var: false,
        }
    }

    /// Override the home directory. `None` skips the user file.
    pub fn with_home_dir(mut self, home_dir: Option<PathBuf>) -> Self {
        self.home_dir = home_dir;
        self
    }

    /// Override the directory the local file is looked up in.
    pub fn with_working_dir(mut self, working_dir: PathBuf) -> Self {
        self.working_dir = Some(working_dir);
        self
    }

    /// Skip loading when the process has `DOTENV_DISABLED` set to `1` or `true`.
    ///
    /// Off by default, in which case every present file is applied whatever
    /// the host environment holds.
    pub fn honor_disable_var(mut self, honor: bool) -> Self {
        self.honor_disable_var = honor;
        self
    }

    /// Path of the user file, if a home directory is known.
    pub fn user_file(&self) -> Option<PathBuf> {
        self.home_dir.as_ref().map(|home| home.join(DOTENV_FILE_NAME))
    }

    /// Path of the local file.
    pub fn local_file(&self) -> PathBuf {
        match &self.working_dir {
            Some(dir) => dir.join(DOTENV_FILE_NAME),
            None => std::env::current_dir()
                .map(|dir| dir.join(DOTENV_FILE_NAME))
                .unwrap_or_else(|_| PathBuf::from(DOTENV_FILE_NAME)),
        }
    }

    /// Load both files into the process environment.
    ///
    /// With `honor_disable_var(true)`, nothing is loaded while `DOTENV_DISABLED`
    /// is `1` or `true`.
    ///
    /// # Errors
    ///
    /// - `ConfigError::UserEnvFile` if `$HOME/.env` exists but cannot be applied.
    /// - `ConfigError::LocalEnvFile` if `./.env` exists but cannot be applied.
    ///
    /// Missing files are silently ignored.
    pub fn load(&self) -> Result<LoadReport, ConfigError> {
        self.load_into(&mut ProcessEnv)
    }

    /// Load both files into `target`.
    ///
    /// The opt-in `DOTENV_DISABLED` gate is read from the process environment;
    /// without it, loading depends only on the two files and `target`.
    pub fn load_into<T: EnvTarget>(&self, target: &mut T) -> Result<LoadReport, ConfigError> {
        if self.honor_disable_var && dotenv_disabled(&ProcessEnv) {
            tracing::debug!("DOTENV_DISABLED is set, skipping .env loading");
            return Ok(LoadReport {
                files: Vec::new(),
                disabled: true,
            });
        }

        let mut report = LoadReport::default();

        if let Some(path) = self.user_file() {
            if let Some(applied) = apply_if_present(EnvFileOrigin::User, &path, target)
                .map_err(|source| ConfigError::UserEnvFile {
                    path: path.clone(),
                    source,
                })?
            {
                report.files.push(applied);
            }
        } else {
            tracing::debug!("No home directory, skipping user .env file");
        }

        let path = self.local_file();
        if let Some(applied) = apply_if_present(EnvFileOrigin::Local, &path, target).map_err(
            |source| ConfigError::LocalEnvFile {
                path: path.clone(),
                source,
            },
        )? {
            report.files.push(applied);
        }

        Ok(report)
    }
}

fn apply_if_present<T: EnvTarget>(
    origin: EnvFileOrigin,
    path: &Path,
    target: &mut T,
) -> Result<Option<AppliedFile>, DotenvError> {
    if !path.is_file() {
        tracing::debug!(path = %path.display(), ?origin, "No .env file, skipping");
        return Ok(None);
    }

    let assignments = apply_file(path, target).inspect_err(|e| {
        tracing::debug!(path = %path.display(), ?origin, error = %e, "Failed to apply .env file");
    })?;
    tracing::debug!(path = %path.display(), ?origin, assignments, "Applied .env file");

    Ok(Some(AppliedFile {
        origin,
        path: path.to_path_buf(),
        assignments,
    }))
}

/// Apply one file to `target`, stopping at the first bad line.
///
/// Returns the number of assignments applied.
fn apply_file<T: EnvTarget>(path: &Path, target: &mut T) -> Result<usize, DotenvError> {
    let content = fs::read_to_string(path).map_err(|e| DotenvError::Io { kind: e.kind() })?;

    let mut applied = 0;
    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        let Some((key, value)) = parse_line(line, line_no)? else {
            continue;
        };

        target
            .set_var(key, value)
            .map_err(|e| DotenvError::EnvWrite {
                key: key.to_string(),
                value: value.to_string(),
                line: line_no,
                reason: e.to_string(),
            })?;
        tracing::trace!(key, line = line_no, "Applied .env assignment");
        applied += 1;
    }

    Ok(applied)
}
