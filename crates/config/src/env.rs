//! Environment sources and targets.
//!
//! Responsibilities:
//! - Abstract reading variables (`EnvSource`) so accessors can run against the
//!   process environment or an injected snapshot.
//! - Abstract writing variables (`EnvTarget`) so the `.env` overlay can be applied
//!   to the process environment or to a snapshot.
//!
//! Does NOT handle:
//! - Parsing `.env` files (see loader/parse.rs).
//! - Any locking around the process environment. Callers load `.env` files once,
//!   early, before other threads read the environment.
//!
//! Invariants:
//! - A process variable whose value is not valid UTF-8 reads as unset.
//! - `ProcessEnv::set_var` never panics; inputs the platform cannot store are
//!   returned as `EnvWriteError`.

use std::collections::HashMap;

use crate::constants::DOTENV_DISABLED_VAR;

/// Read access to a set of environment variables.
pub trait EnvSource {
    /// Raw value of `key`, or `None` if it is unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// Write access to a set of environment variables.
pub trait EnvTarget {
    /// Set `key` to `value`, replacing any previous value.
    fn set_var(&mut self, key: &str, value: &str) -> Result<(), EnvWriteError>;
}

/// The platform refused an assignment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct EnvWriteError(pub String);

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        std::env::var_os(key).and_then(|value| value.into_string().ok())
    }
}

impl EnvTarget for ProcessEnv {
    fn set_var(&mut self, key: &str, value: &str) -> Result<(), EnvWriteError> {
        if key.is_empty() {
            return Err(EnvWriteError("variable name is empty".to_string()));
        }
        if key.contains('=') {
            return Err(EnvWriteError("variable name contains '='".to_string()));
        }
        if key.contains('\0') || value.contains('\0') {
            return Err(EnvWriteError("NUL byte in variable".to_string()));
        }

        // SAFETY: the process environment is only mutated while loading `.env`
        // files, which callers do once at start-up before spawning threads.
        unsafe {
            std::env::set_var(key, value);
        }
        Ok(())
    }
}

/// An in-memory environment snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl EnvTarget for MapEnv {
    fn set_var(&mut self, key: &str, value: &str) -> Result<(), EnvWriteError> {
        self.vars.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Check whether `.env` loading is disabled via `DOTENV_DISABLED`.
pub fn dotenv_disabled(source: &impl EnvSource) -> bool {
    matches!(source.var(DOTENV_DISABLED_VAR).as_deref(), Some("true") | Some("1"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_map_env_overwrites() {
        let mut env = MapEnv::new().with("A", "1");
        env.set_var("A", "2").unwrap();
        assert_eq!(env.var("A").as_deref(), Some("2"));
        assert_eq!(env.var("B"), None);
    }

    #[test]
    #[serial]
    fn test_process_env_reads_set_and_unset() {
        temp_env::with_vars(
            [
                ("_ENVDEFAULTS_TEST_SET", Some("value")),
                ("_ENVDEFAULTS_TEST_UNSET", None),
            ],
            || {
                assert_eq!(
                    ProcessEnv.var("_ENVDEFAULTS_TEST_SET").as_deref(),
                    Some("value")
                );
                assert_eq!(ProcessEnv.var("_ENVDEFAULTS_TEST_UNSET"), None);
            },
        );
    }

    #[test]
    #[serial]
    fn test_process_env_set_var_round_trips() {
        temp_env::with_var_unset("_ENVDEFAULTS_TEST_WRITE", || {
            ProcessEnv
                .set_var("_ENVDEFAULTS_TEST_WRITE", "written")
                .unwrap();
            assert_eq!(
                std::env::var("_ENVDEFAULTS_TEST_WRITE").as_deref(),
                Ok("written")
            );
        });
    }

    #[test]
    fn test_process_env_rejects_unstorable_input() {
        assert!(ProcessEnv.set_var("", "x").is_err());
        assert!(ProcessEnv.set_var("A=B", "x").is_err());
        assert!(ProcessEnv.set_var("NUL_VALUE", "a\0b").is_err());
    }

    #[test]
    fn test_dotenv_disabled_values() {
        assert!(dotenv_disabled(&MapEnv::new().with(DOTENV_DISABLED_VAR, "1")));
        assert!(dotenv_disabled(&MapEnv::new().with(DOTENV_DISABLED_VAR, "true")));
        assert!(!dotenv_disabled(&MapEnv::new().with(DOTENV_DISABLED_VAR, "0")));
        assert!(!dotenv_disabled(&MapEnv::new()));
    }
}
