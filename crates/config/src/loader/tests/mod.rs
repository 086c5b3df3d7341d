//! Tests for `.env` loading.
//!
//! Responsibilities:
//! - Test the line grammar (comments, blanks, separators, trimming).
//! - Test file discovery, ordering, overriding and error attribution.
//!
//! Invariants:
//! - Tests that read or write the process environment are `#[serial]` and restore
//!   every variable they touch via `temp_env`.
//! - Scratch home and working directories come from `tempfile` and are injected
//!   through `DotenvLoader` rather than changing the real cwd.

pub mod parse_tests;
