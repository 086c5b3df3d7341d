//! Shared helpers for architecture tests.
//!
//! Responsibilities:
//! - Locate the workspace root independently of the test's working directory.
//! - Enumerate workspace Rust sources, skipping build output and this crate.

#![allow(dead_code)]

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// The workspace root, two levels above this crate's manifest.
pub fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .ancestors()
        .find(|dir| {
            std::fs::read_to_string(dir.join("Cargo.toml"))
                .is_ok_and(|content| content.contains("[workspace]"))
        })
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

/// Every `.rs` file under `dir`, excluding `target/` and `architecture-tests/`.
pub fn rust_files(dir: &Path) -> Vec<PathBuf> {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name();
            name != OsStr::new("target") && name != OsStr::new("architecture-tests")
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension() == Some(OsStr::new("rs")))
        .map(|e| e.into_path())
        .collect()
}

/// Whether a path is test-only code.
pub fn is_test_path(path: &Path) -> bool {
    let path = path.to_string_lossy();
    path.contains("/tests/") || path.ends_with("_tests.rs")
}
