//! Typed accessors.
//!
//! Responsibilities:
//! - Resolve a setting's effective value: environment value (coerced to the
//!   requested type), else the registered default of the same kind, else the
//!   type's zero value.
//!
//! Does NOT handle:
//! - Loading `.env` files (see loader/builder.rs). Overlays land in the process
//!   environment and are seen here through `ProcessEnv`.
//!
//! Invariants:
//! - Accessors never fail. A value that does not parse for its type falls through
//!   to the default, silently.
//! - `get_bool` is the exception: any set value resolves directly, `true` when it
//!   equals `"true"` ignoring case and `false` otherwise, without consulting the
//!   registered default.
//! - A registered default of a different kind than the accessor is ignored, with
//!   one widening: `get_int64` accepts an `Int` default.

use std::sync::Arc;
use std::time::Duration;

use crate::duration::parse_duration;
use crate::env::{EnvSource, ProcessEnv};
use crate::registry::Registry;
use crate::types::{DefaultValue, split_list};

/// Accessor front-end pairing a registry with an environment source.
#[derive(Debug, Clone)]
pub struct Settings<E: EnvSource = ProcessEnv> {
    registry: Arc<Registry>,
    source: E,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    /// Accessors over the global registry and the process environment.
    pub fn new() -> Self {
        Self {
            registry: Arc::clone(Registry::global()),
            source: ProcessEnv,
        }
    }
}

impl<E: EnvSource> Settings<E> {
    /// Accessors over an explicit registry and environment source.
    pub fn with_source(registry: Arc<Registry>, source: E) -> Self {
        Self { registry, source }
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    pub fn source(&self) -> &E {
        &self.source
    }

    fn registered<T>(&self, name: &str, extract: impl FnOnce(DefaultValue) -> Option<T>) -> Option<T> {
        self.registry.default_value(name).and_then(extract)
    }

    /// The variable as a string. Unset falls back to the default, then `""`.
    pub fn get_string(&self, name: &str) -> String {
        if let Some(value) = self.source.var(name) {
            return value;
        }
        self.registered(name, |d| match d {
            DefaultValue::String(v) => Some(v),
            _ => None,
        })
        .unwrap_or_default()
    }

    /// The variable as a comma-separated list. Elements are not trimmed.
    ///
    /// Unset falls back to the default, then an empty list.
    pub fn get_string_slice(&self, name: &str) -> Vec<String> {
        if let Some(value) = self.source.var(name) {
            return split_list(&value);
        }
        self.registered(name, |d| match d {
            DefaultValue::StringList(v) => Some(v),
            _ => None,
        })
        .unwrap_or_default()
    }

    /// The variable as a base-10 platform integer.
    ///
    /// Unset or unparseable falls back to the default, then `0`.
    pub fn get_int(&self, name: &str) -> isize {
        if let Some(parsed) = self.source.var(name).and_then(|v| v.parse().ok()) {
            return parsed;
        }
        self.registered(name, |d| match d {
            DefaultValue::Int(v) => Some(v),
            _ => None,
        })
        .unwrap_or_default()
    }

    /// The variable as a base-10 `i64`.
    ///
    /// Unset or unparseable falls back to an `Int64` or `Int` default, then `0`.
    pub fn get_int64(&self, name: &str) -> i64 {
        if let Some(parsed) = self.source.var(name).and_then(|v| v.parse().ok()) {
            return parsed;
        }
        self.registered(name, |d| match d {
            DefaultValue::Int64(v) => Some(v),
            DefaultValue::Int(v) => i64::try_from(v).ok(),
            _ => None,
        })
        .unwrap_or_default()
    }

    /// The variable as an `f64`, accepting decimal and exponent notation.
    ///
    /// Unset or unparseable falls back to the default, then `0.0`.
    pub fn get_float64(&self, name: &str) -> f64 {
        if let Some(parsed) = self.source.var(name).and_then(|v| v.parse().ok()) {
            return parsed;
        }
        self.registered(name, |d| match d {
            DefaultValue::Float(v) => Some(v),
            _ => None,
        })
        .unwrap_or_default()
    }

    /// The variable as a boolean.
    ///
    /// A set variable is `true` only when it equals `"true"` ignoring case; any
    /// other set value is `false` and the default is not consulted. Unset falls
    /// back to the default, then `false`.
    pub fn get_bool(&self, name: &str) -> bool {
        if let Some(value) = self.source.var(name) {
            return value.eq_ignore_ascii_case("true");
        }
        self.registered(name, |d| match d {
            DefaultValue::Bool(v) => Some(v),
            _ => None,
        })
        .unwrap_or_default()
    }

    /// The variable as a duration expression such as `1m30s`.
    ///
    /// Unset or unparseable falls back to the default, then zero.
    pub fn get_duration(&self, name: &str) -> Duration {
        if let Some(parsed) = self.source.var(name).and_then(|v| parse_duration(&v)) {
            return parsed;
        }
        self.registered(name, |d| match d {
            DefaultValue::Duration(v) => Some(v),
            _ => None,
        })
        .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnv;

    fn settings(env: MapEnv) -> Settings<MapEnv> {
        Settings::with_source(Arc::new(Registry::new()), env)
    }

    #[test]
    fn test_zero_values_without_env_or_default() {
        let s = settings(MapEnv::new());
        assert_eq!(s.get_string("X"), "");
        assert!(s.get_string_slice("X").is_empty());
        assert_eq!(s.get_int("X"), 0);
        assert_eq!(s.get_int64("X"), 0);
        assert_eq!(s.get_float64("X"), 0.0);
        assert!(!s.get_bool("X"));
        assert_eq!(s.get_duration("X"), Duration::ZERO);
    }

    #[test]
    fn test_env_values_parsed() {
        let s = settings(
            MapEnv::new()
                .with("NAME", "svc")
                .with("HOSTS", "a,b,c")
                .with("MAX_CONNS", "10")
                .with("BIG", "-9000000000")
                .with("RATIO", "1.5e3")
                .with("DEBUG", "TRUE")
                .with("TIMEOUT", "1m30s"),
        );
        assert_eq!(s.get_string("NAME"), "svc");
        assert_eq!(s.get_string_slice("HOSTS"), ["a", "b", "c"]);
        assert_eq!(s.get_int("MAX_CONNS"), 10);
        assert_eq!(s.get_int64("BIG"), -9_000_000_000);
        assert_eq!(s.get_float64("RATIO"), 1500.0);
        assert!(s.get_bool("DEBUG"));
        assert_eq!(s.get_duration("TIMEOUT"), Duration::from_secs(90));
    }

    #[test]
    fn test_string_slice_keeps_elements_untrimmed() {
        let s = settings(MapEnv::new().with("ONE", "a").with("SPACED", " a, b ,"));
        assert_eq!(s.get_string_slice("ONE"), ["a"]);
        assert_eq!(s.get_string_slice("SPACED"), [" a", " b ", ""]);
    }

    #[test]
    fn test_env_wins_over_default() {
        let s = settings(MapEnv::new().with("PORT", "9090").with("HOST", ""));
        s.registry().register("PORT", 8080isize, "").unwrap();
        s.registry().register("HOST", "localhost", "").unwrap();
        assert_eq!(s.get_int("PORT"), 9090);
        // Set-but-empty strings are values, not absences.
        assert_eq!(s.get_string("HOST"), "");
    }

    #[test]
    fn test_unparseable_int_falls_through_to_default_then_zero() {
        let s = settings(MapEnv::new().with("MAX_CONNS", "abc"));
        assert_eq!(s.get_int("MAX_CONNS"), 0);

        s.registry().register("MAX_CONNS", 25isize, "").unwrap();
        assert_eq!(s.get_int("MAX_CONNS"), 25);
    }

    #[test]
    fn test_unparseable_numeric_and_duration_fall_through() {
        let s = settings(
            MapEnv::new()
                .with("I64", "1.5")
                .with("F", "fast")
                .with("D", "10"),
        );
        s.registry().register("I64", 7i64, "").unwrap();
        s.registry().register("F", 0.25f64, "").unwrap();
        s.registry()
            .register("D", Duration::from_millis(300), "")
            .unwrap();

        assert_eq!(s.get_int64("I64"), 7);
        assert_eq!(s.get_float64("F"), 0.25);
        assert_eq!(s.get_duration("D"), Duration::from_millis(300));
    }

    #[test]
    fn test_bool_set_values_bypass_default() {
        for (raw, expected) in [
            ("TRUE", true),
            ("true", true),
            ("True", true),
            ("false", false),
            ("yes", false),
            ("1", false),
            ("", false),
        ] {
            let s = settings(MapEnv::new().with("FLAG", raw));
            s.registry().register("FLAG", true, "").unwrap();
            assert_eq!(s.get_bool("FLAG"), expected, "raw value {raw:?}");
        }
    }

    #[test]
    fn test_bool_and_int_fallback_asymmetry() {
        let s = settings(MapEnv::new().with("FLAG", "garbage").with("COUNT", "garbage"));
        s.registry().register("FLAG", true, "").unwrap();
        s.registry().register("COUNT", 5isize, "").unwrap();

        assert!(!s.get_bool("FLAG"), "bool resolves directly from the set value");
        assert_eq!(s.get_int("COUNT"), 5, "int falls through to the default");
    }

    #[test]
    fn test_unset_bool_uses_default() {
        let s = settings(MapEnv::new());
        s.registry().register("FLAG", true, "").unwrap();
        assert!(s.get_bool("FLAG"));
    }

    #[test]
    fn test_default_of_other_kind_is_ignored() {
        let s = settings(MapEnv::new());
        s.registry().register("PORT", "8080", "").unwrap();
        s.registry().register("LIST", 3isize, "").unwrap();

        assert_eq!(s.get_int("PORT"), 0);
        assert!(s.get_string_slice("LIST").is_empty());
        assert_eq!(s.get_string("LIST"), "");
    }

    #[test]
    fn test_int64_widens_int_default() {
        let s = settings(MapEnv::new());
        s.registry().register("LIMIT", 42isize, "").unwrap();
        assert_eq!(s.get_int64("LIMIT"), 42);
        // The reverse narrowing is not performed.
        s.registry().register("LIMIT64", 42i64, "").unwrap();
        assert_eq!(s.get_int("LIMIT64"), 0);
    }

    #[test]
    fn test_registered_defaults_returned_when_unset() {
        let s = settings(MapEnv::new());
        s.registry().register("HOSTS", ["x", "y"], "").unwrap();
        s.registry().register("NAME", "default", "").unwrap();
        s.registry()
            .register("WAIT", Duration::from_secs(2), "")
            .unwrap();

        assert_eq!(s.get_string_slice("HOSTS"), ["x", "y"]);
        assert_eq!(s.get_string("NAME"), "default");
        assert_eq!(s.get_duration("WAIT"), Duration::from_secs(2));
    }
}
