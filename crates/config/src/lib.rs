//! Process configuration from environment variables and `.env` files.
//!
//! An application registers typed defaults at start-up, optionally overlays
//! `$HOME/.env` and `./.env` onto the process environment, then reads settings
//! through typed accessors that fall back to the registered default and finally
//! to the type's zero value.
//!
//! ```no_run
//! use std::time::Duration;
//!
//! envdefaults::register("MAX_CONNS", 10, "Connection pool size")?;
//! envdefaults::register("TIMEOUT", Duration::from_secs(5), "Request timeout")?;
//! envdefaults::load()?;
//!
//! let pool = envdefaults::get_int("MAX_CONNS");
//! let timeout = envdefaults::get_duration("TIMEOUT");
//! # let _ = (pool, timeout);
//! # Ok::<(), envdefaults::ConfigError>(())
//! ```
//!
//! The crate-level functions use a process-wide `Registry` and the real process
//! environment. `Settings::with_source` runs the same accessors against an
//! explicit registry and an injected environment snapshot.

pub mod constants;
pub mod duration;
pub mod env;
pub mod help;
mod loader;
pub mod registry;
pub mod settings;
pub mod types;

use std::time::Duration;

pub use duration::{format_duration, parse_duration};
pub use env::{EnvSource, EnvTarget, EnvWriteError, MapEnv, ProcessEnv};
pub use help::HelpTable;
pub use loader::{
    AppliedFile, ConfigError, DotenvError, DotenvLoader, EnvFileOrigin, LoadReport, parse_line,
};
pub use registry::Registry;
pub use settings::Settings;
pub use types::{DefaultValue, Descriptor, SettingKind, UnknownKind};

/// Register a default in the global registry. Re-registering replaces.
///
/// # Errors
///
/// Returns `ConfigError::EmptySettingName` if `name` is empty.
pub fn register(
    name: impl Into<String>,
    default: impl Into<DefaultValue>,
    description: impl Into<String>,
) -> Result<(), ConfigError> {
    Registry::global().register(name, default, description)
}

/// The descriptor registered for `name` in the global registry.
pub fn default(name: &str) -> Option<Descriptor> {
    Registry::global().default(name)
}

/// Overlay `$HOME/.env` and then `./.env` onto the process environment.
///
/// Call once, early, before other threads read the environment.
pub fn load() -> Result<LoadReport, ConfigError> {
    DotenvLoader::new().load()
}

/// Print every registered setting to stdout, sorted by name.
pub fn help() {
    Registry::global().help();
}

pub fn get_string(name: &str) -> String {
    Settings::new().get_string(name)
}

pub fn get_string_slice(name: &str) -> Vec<String> {
    Settings::new().get_string_slice(name)
}

pub fn get_int(name: &str) -> isize {
    Settings::new().get_int(name)
}

pub fn get_int64(name: &str) -> i64 {
    Settings::new().get_int64(name)
}

pub fn get_float64(name: &str) -> f64 {
    Settings::new().get_float64(name)
}

pub fn get_bool(name: &str) -> bool {
    Settings::new().get_bool(name)
}

pub fn get_duration(name: &str) -> Duration {
    Settings::new().get_duration(name)
}
