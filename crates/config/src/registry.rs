//! Default registry.
//!
//! Responsibilities:
//! - Store one `Descriptor` per setting name, replacing on re-registration.
//! - Serve lookups concurrently with rare registrations.
//! - Provide the process-wide instance used by the crate-level functions.
//!
//! Does NOT handle:
//! - Reading the environment (see settings.rs).
//! - Rendering (see help.rs); `Registry::help` only hands a snapshot over.
//!
//! Invariants:
//! - Descriptors are stored behind `Arc` and swapped whole, so a lookup sees either
//!   the old or the new descriptor, never a mix.
//! - A failed registration leaves the registry untouched.
//! - Lock poisoning is recovered; the map is never left half-written by a panic
//!   because insertion is a single `HashMap::insert`.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::loader::ConfigError;
use crate::types::{DefaultValue, Descriptor};

type Entries = HashMap<String, Arc<Descriptor>>;

/// Thread-safe mapping from setting name to its registered default.
#[derive(Debug)]
pub struct Registry {
    entries: RwLock<Entries>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide registry.
    pub fn global() -> &'static Arc<Registry> {
        static GLOBAL: OnceLock<Arc<Registry>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(Registry::new()))
    }

    fn read(&self) -> RwLockReadGuard<'_, Entries> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Entries> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a default value for an environment variable.
    ///
    /// When the variable is unset (or fails to parse for its kind), accessors
    /// return this default. Registering the same name again replaces the
    /// previous descriptor entirely.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptySettingName` if `name` is empty or whitespace.
    pub fn register(
        &self,
        name: impl Into<String>,
        default: impl Into<DefaultValue>,
        description: impl Into<String>,
    ) -> Result<(), ConfigError> {
        self.register_descriptor(Descriptor::new(name, default, description))
    }

    /// Register a prepared descriptor.
    pub fn register_descriptor(&self, descriptor: Descriptor) -> Result<(), ConfigError> {
        if descriptor.name.trim().is_empty() {
            return Err(ConfigError::EmptySettingName);
        }

        tracing::trace!(
            name = %descriptor.name,
            kind = %descriptor.kind(),
            "Registering default"
        );

        let descriptor = Arc::new(descriptor);
        self.write().insert(descriptor.name.clone(), descriptor);
        Ok(())
    }

    /// The descriptor registered for `name`, if any.
    pub fn default(&self, name: &str) -> Option<Descriptor> {
        self.read().get(name).map(|d| Descriptor::clone(d))
    }

    /// The default value registered for `name`, if any.
    pub(crate) fn default_value(&self, name: &str) -> Option<DefaultValue> {
        self.read().get(name).map(|d| d.default.clone())
    }

    /// Snapshot of every descriptor, sorted by name.
    pub fn descriptors(&self) -> Vec<Descriptor> {
        let mut descriptors: Vec<Descriptor> =
            self.read().values().map(|d| Descriptor::clone(d)).collect();
        descriptors.sort_by(|a, b| a.name.cmp(&b.name));
        descriptors
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Print the help table for this registry to stdout.
    pub fn help(&self) {
        crate::help::print_help(&self.descriptors());
    }
}
