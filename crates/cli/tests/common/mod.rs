//! Shared test utilities for envdefaults integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory with scratch home and working
//!   directories, so the developer's own `.env` files never leak in.
//!
//! Invariants / Assumptions:
//! - `HOME` points at a fresh temp dir; the working directory is another.
//! - `DOTENV_DISABLED` and `NO_COLOR`-sensitive state are reset per command.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Scratch directories backing one CLI invocation.
pub struct Sandbox {
    pub home: TempDir,
    pub work: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().unwrap(),
            work: TempDir::new().unwrap(),
        }
    }

    pub fn write_home_env(&self, content: &str) {
        fs::write(self.home.path().join(".env"), content).unwrap();
    }

    pub fn write_local_env(&self, content: &str) {
        fs::write(self.work.path().join(".env"), content).unwrap();
    }

    pub fn home_env_path(&self) -> std::path::PathBuf {
        self.home.path().join(".env")
    }

    /// A hermetic `envdefaults` command running inside this sandbox.
    pub fn cmd(&self) -> Command {
        envdefaults_cmd(self.home.path(), self.work.path())
    }
}

/// Returns an `envdefaults` command with `HOME` and cwd set to the given dirs.
pub fn envdefaults_cmd(home: &Path, work: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envdefaults");
    cmd.current_dir(work)
        .env("HOME", home)
        .env("USERPROFILE", home)
        .env("NO_COLOR", "1")
        .env_remove("DOTENV_DISABLED")
        .env_remove("RUST_LOG");
    cmd
}
