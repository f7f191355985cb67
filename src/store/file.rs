// SPDX-License-Identifier: MPL-2.0
//! TOML-file backed settings store.
//!
//! All keys live in one flat table in `settings.toml`. The file is read once
//! when the store is opened and rewritten on every `set_string`.
//!
//! # Path Resolution
//!
//! 1. Explicit path passed to [`FileStore::open_at`] (tests, portable installs)
//! 2. `ICED_TOAST_CONFIG_DIR` environment variable (if set)
//! 3. Platform config directory via `dirs`

use super::SettingsStore;
use crate::error::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToast";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_TOAST_CONFIG_DIR";

/// Settings store persisted to a TOML file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at the default location.
    ///
    /// Uses `settings.toml` in the working directory when no config
    /// directory can be determined.
    pub fn open() -> Result<Self> {
        let path = default_path().unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
        Self::open_at(path)
    }

    /// Opens the store at an explicit path.
    ///
    /// A missing file yields an empty store. A file that is not valid TOML is
    /// ignored with a warning and replaced on the next write.
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            load_from_path(&path)?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileStore {
    fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        save_to_path(&self.values, &self.path)
    }
}

fn default_path() -> Option<PathBuf> {
    let dir = std::env::var_os(ENV_CONFIG_DIR)
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_NAME)))?;
    Some(dir.join(CONFIG_FILE))
}

fn load_from_path(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(values) => Ok(values),
        Err(error) => {
            log::warn!(
                "Ignoring unreadable settings file {}: {}",
                path.display(),
                error
            );
            Ok(BTreeMap::new())
        }
    }
}

fn save_to_path(values: &BTreeMap<String, String>, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(values)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn open_at_missing_file_is_empty() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let store =
            FileStore::open_at(temp_dir.path().join("settings.toml")).expect("open should work");
        assert!(!store.has("key"));
    }

    #[test]
    fn values_survive_reopen() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join("settings.toml");

        let mut store = FileStore::open_at(&path).expect("open should work");
        store
            .set_string("app.defaults", r#"{"size":150.0}"#)
            .expect("save should create directories");
        assert!(path.exists());

        let reopened = FileStore::open_at(&path).expect("reopen should work");
        assert_eq!(
            reopened.get_string("app.defaults").as_deref(),
            Some(r#"{"size":150.0}"#)
        );
    }

    #[test]
    fn invalid_toml_is_ignored() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "not = valid = toml").expect("failed to write invalid toml");

        let store = FileStore::open_at(&path).expect("invalid file should not error");
        assert!(!store.has("not"));
    }
}
