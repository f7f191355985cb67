// SPDX-License-Identifier: MPL-2.0
//! Persisted string-keyed settings.
//!
//! The notifier only needs three operations from its host's preferences
//! facility, captured by [`SettingsStore`]. Two implementations ship with
//! the crate:
//!
//! - [`MemoryStore`] keeps values for the lifetime of the process (tests,
//!   embedded hosts with their own persistence)
//! - [`FileStore`] keeps values in a `settings.toml` file

mod file;

pub use file::FileStore;

use crate::error::Result;
use std::collections::HashMap;

/// String-keyed key/value persistence.
pub trait SettingsStore {
    /// Returns whether a value is stored under `key`.
    fn has(&self, key: &str) -> bool;

    /// Returns the value stored under `key`, if any.
    fn get_string(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_string(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Process-lifetime store backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SettingsStore for MemoryStore {
    fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
