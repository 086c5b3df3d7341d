//! Setting kinds, default values and descriptors.
//!
//! Responsibilities:
//! - Define the closed set of supported setting kinds and their display labels.
//! - Define `DefaultValue`, the tagged union a default is registered with.
//! - Define `Descriptor`, the metadata stored per registered setting.
//!
//! Does NOT handle:
//! - Storage or lookup of descriptors (see registry.rs).
//! - Resolving effective values from the environment (see settings.rs).
//!
//! Invariants:
//! - A descriptor's kind is always derived from its default, never stored separately,
//!   so the two cannot disagree.
//! - `DefaultValue` only converts from the supported Rust types; any other type is
//!   rejected at compile time.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::duration::{format_duration, parse_duration};
use crate::loader::ConfigError;

/// The kind of value a setting holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKind {
    String,
    StringList,
    Int,
    Int64,
    Float,
    Bool,
    Duration,
}

impl SettingKind {
    /// Every kind, in declaration order.
    pub const ALL: [SettingKind; 7] = [
        SettingKind::String,
        SettingKind::StringList,
        SettingKind::Int,
        SettingKind::Int64,
        SettingKind::Float,
        SettingKind::Bool,
        SettingKind::Duration,
    ];

    /// Label shown in the help table's type column.
    pub fn label(self) -> &'static str {
        match self {
            SettingKind::String => "string",
            SettingKind::StringList => "string list",
            SettingKind::Int => "integer",
            SettingKind::Int64 => "int64",
            SettingKind::Float => "float",
            SettingKind::Bool => "boolean",
            SettingKind::Duration => "duration",
        }
    }
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a kind name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown setting kind '{0}' (expected one of: string, string-list, int, int64, float, bool, duration)")]
pub struct UnknownKind(pub String);

impl FromStr for SettingKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "string" | "str" => Ok(SettingKind::String),
            "string list" | "string-list" | "stringlist" | "list" => Ok(SettingKind::StringList),
            "integer" | "int" => Ok(SettingKind::Int),
            "int64" => Ok(SettingKind::Int64),
            "float" | "float64" => Ok(SettingKind::Float),
            "boolean" | "bool" => Ok(SettingKind::Bool),
            "duration" => Ok(SettingKind::Duration),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

/// A registered default value. The variant determines the setting's kind.
///
/// Only the supported Rust types convert into a default, so registering
/// anything else fails to compile:
///
/// ```compile_fail
/// envdefaults::register("X", vec![1i32, 2], "")?;
/// # Ok::<(), envdefaults::ConfigError>(())
/// ```
///
/// ```compile_fail
/// envdefaults::register("X", 1u8, "")?;
/// # Ok::<(), envdefaults::ConfigError>(())
/// ```
///
/// ```
/// use envdefaults::DefaultValue;
///
/// assert_eq!(DefaultValue::from(10), DefaultValue::Int(10));
/// assert_eq!(
///     DefaultValue::from(vec!["a", "b"]),
///     DefaultValue::StringList(vec!["a".to_string(), "b".to_string()])
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    String(String),
    StringList(Vec<String>),
    Int(isize),
    Int64(i64),
    Float(f64),
    Bool(bool),
    Duration(Duration),
}

impl DefaultValue {
    pub fn kind(&self) -> SettingKind {
        match self {
            DefaultValue::String(_) => SettingKind::String,
            DefaultValue::StringList(_) => SettingKind::StringList,
            DefaultValue::Int(_) => SettingKind::Int,
            DefaultValue::Int64(_) => SettingKind::Int64,
            DefaultValue::Float(_) => SettingKind::Float,
            DefaultValue::Bool(_) => SettingKind::Bool,
            DefaultValue::Duration(_) => SettingKind::Duration,
        }
    }

    /// Build a default of the given kind from its textual form.
    ///
    /// Uses the same coercion rules the accessors apply to environment values,
    /// except that a boolean must be spelled `true` or `false` here.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidDefault` if `raw` cannot be coerced to `kind`.
    pub fn parse(kind: SettingKind, raw: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidDefault {
            kind,
            value: raw.to_string(),
        };

        let value = match kind {
            SettingKind::String => DefaultValue::String(raw.to_string()),
            SettingKind::StringList => DefaultValue::StringList(split_list(raw)),
            SettingKind::Int => DefaultValue::Int(raw.parse().map_err(|_| invalid())?),
            SettingKind::Int64 => DefaultValue::Int64(raw.parse().map_err(|_| invalid())?),
            SettingKind::Float => DefaultValue::Float(raw.parse().map_err(|_| invalid())?),
            SettingKind::Bool => match raw.to_ascii_lowercase().as_str() {
                "true" => DefaultValue::Bool(true),
                "false" => DefaultValue::Bool(false),
                _ => return Err(invalid()),
            },
            SettingKind::Duration => {
                DefaultValue::Duration(parse_duration(raw).ok_or_else(invalid)?)
            }
        };
        Ok(value)
    }
}

/// Split a comma-separated list. Elements are not trimmed.
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::String(v) => f.write_str(v),
            DefaultValue::StringList(v) => f.write_str(&v.join(",")),
            DefaultValue::Int(v) => write!(f, "{v}"),
            DefaultValue::Int64(v) => write!(f, "{v}"),
            DefaultValue::Float(v) => write!(f, "{v}"),
            DefaultValue::Bool(v) => write!(f, "{v}"),
            DefaultValue::Duration(v) => f.write_str(&format_duration(*v)),
        }
    }
}

impl From<String> for DefaultValue {
    fn from(value: String) -> Self {
        DefaultValue::String(value)
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        DefaultValue::String(value.to_string())
    }
}

impl From<Vec<String>> for DefaultValue {
    fn from(value: Vec<String>) -> Self {
        DefaultValue::StringList(value)
    }
}

impl From<&[&str]> for DefaultValue {
    fn from(value: &[&str]) -> Self {
        DefaultValue::StringList(value.iter().map(|s| s.to_string()).collect())
    }
}

impl From<Vec<&str>> for DefaultValue {
    fn from(value: Vec<&str>) -> Self {
        DefaultValue::StringList(value.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for DefaultValue {
    fn from(value: [&str; N]) -> Self {
        DefaultValue::StringList(value.iter().map(|s| s.to_string()).collect())
    }
}

impl From<isize> for DefaultValue {
    fn from(value: isize) -> Self {
        DefaultValue::Int(value)
    }
}

/// Unsuffixed integer literals land here, as the platform integer.
impl From<i32> for DefaultValue {
    fn from(value: i32) -> Self {
        DefaultValue::Int(value as isize)
    }
}

impl From<i64> for DefaultValue {
    fn from(value: i64) -> Self {
        DefaultValue::Int64(value)
    }
}

impl From<f64> for DefaultValue {
    fn from(value: f64) -> Self {
        DefaultValue::Float(value)
    }
}

impl From<bool> for DefaultValue {
    fn from(value: bool) -> Self {
        DefaultValue::Bool(value)
    }
}

impl From<Duration> for DefaultValue {
    fn from(value: Duration) -> Self {
        DefaultValue::Duration(value)
    }
}

/// Metadata for one registered setting.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor {
    /// Environment variable name.
    pub name: String,
    /// Value used when the environment does not provide one.
    pub default: DefaultValue,
    /// Free text shown by the help table.
    pub description: String,
}

impl Descriptor {
    pub fn new(
        name: impl Into<String>,
        default: impl Into<DefaultValue>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            default: default.into(),
            description: description.into(),
        }
    }

    /// Kind inferred from the default value.
    pub fn kind(&self) -> SettingKind {
        self.default.kind()
    }
}
