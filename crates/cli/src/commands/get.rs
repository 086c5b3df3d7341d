//! Resolve one setting.
//!
//! Responsibilities:
//! - Register the optional default in the global registry.
//! - Resolve the setting with the accessor for the requested kind and print it.
//!
//! Invariants:
//! - Output uses the same natural string form as the help table.

use anyhow::{Context, Result};
use envdefaults::{DefaultValue, SettingKind, format_duration};

/// Resolve `name` as `kind` and print the effective value.
pub fn run(
    name: &str,
    kind: SettingKind,
    default: Option<&str>,
    description: String,
) -> Result<()> {
    if let Some(raw) = default {
        let value = DefaultValue::parse(kind, raw)
            .with_context(|| format!("Failed to parse default for {name}"))?;
        envdefaults::register(name, value, description)?;
    }

    println!("{}", resolve(name, kind));
    Ok(())
}

fn resolve(name: &str, kind: SettingKind) -> String {
    match kind {
        SettingKind::String => envdefaults::get_string(name),
        SettingKind::StringList => envdefaults::get_string_slice(name).join(","),
        SettingKind::Int => envdefaults::get_int(name).to_string(),
        SettingKind::Int64 => envdefaults::get_int64(name).to_string(),
        SettingKind::Float => envdefaults::get_float64(name).to_string(),
        SettingKind::Bool => envdefaults::get_bool(name).to_string(),
        SettingKind::Duration => format_duration(envdefaults::get_duration(name)),
    }
}
