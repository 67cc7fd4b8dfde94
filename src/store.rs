//! Key-value configuration stores.
//!
//! Each binding persists as one entry: the action id's canonical string form
//! maps to a chord token (or the empty string for explicitly-unbound). The
//! registry only speaks [`ConfigStore`]; where the entries actually live is
//! the store's concern. [`MemoryStore`] backs tests and embedded hosts,
//! [`FileStore`] keeps the entries in a YAML file under the user's config
//! directory.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Abstract key-value store the binding round trip runs against
pub trait ConfigStore {
    /// Read the value stored under `key`, if any
    fn get_value(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value
    fn set_value(&mut self, key: &str, value: &str);
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ConfigStore for MemoryStore {
    fn get_value(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_value(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// On-disk document layout: a single `bindings` map, sorted for stable diffs
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    bindings: BTreeMap<String, String>,
}

/// YAML-file-backed store.
///
/// Loading is forgiving: a missing or unreadable file yields an empty store
/// (the registry then falls back to default chords), with a warning logged.
/// Writing back to disk is explicit via [`persist`](FileStore::persist).
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    doc: StoreFile,
}

impl FileStore {
    /// Open the store at `path`, reading existing entries if the file exists
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        if !path.exists() {
            tracing::debug!("no binding store at {}, starting empty", path.display());
            return Self {
                path,
                doc: StoreFile::default(),
            };
        }

        let doc = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str::<StoreFile>(&content) {
                Ok(doc) => {
                    tracing::info!(
                        "loaded {} binding entries from {}",
                        doc.bindings.len(),
                        path.display()
                    );
                    doc
                }
                Err(e) => {
                    tracing::warn!("failed to parse binding store at {}: {}", path.display(), e);
                    StoreFile::default()
                }
            },
            Err(e) => {
                tracing::warn!("failed to read binding store at {}: {}", path.display(), e);
                StoreFile::default()
            }
        };

        Self { path, doc }
    }

    /// Write all entries back to disk, creating parent directories as needed
    pub fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(&self.doc)?;
        std::fs::write(&self.path, yaml)?;
        tracing::info!(
            "saved {} binding entries to {}",
            self.doc.bindings.len(),
            self.path.display()
        );
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.doc.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doc.bindings.is_empty()
    }
}

impl ConfigStore for FileStore {
    fn get_value(&self, key: &str) -> Option<String> {
        self.doc.bindings.get(key).cloned()
    }

    fn set_value(&mut self, key: &str, value: &str) {
        self.doc.bindings.insert(key.to_string(), value.to_string());
    }
}

/// Default store location for an application: `<config dir>/<app>/bindings.yaml`
///
/// Resolves to `~/.config/<app>/bindings.yaml` on Unix and
/// `%APPDATA%\<app>\bindings.yaml` on Windows.
pub fn default_path(app_name: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(app_name).join("bindings.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get_value("TogglePanel"), None);

        store.set_value("TogglePanel", "^P");
        assert_eq!(store.get_value("TogglePanel"), Some("^P".to_string()));
        assert_eq!(store.len(), 1);

        store.set_value("TogglePanel", "");
        assert_eq!(store.get_value("TogglePanel"), Some(String::new()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_default_path_contains_app_name() {
        if let Some(path) = default_path("my-game") {
            let s = path.to_string_lossy();
            assert!(s.contains("my-game"));
            assert!(s.ends_with("bindings.yaml"));
        }
    }
}
