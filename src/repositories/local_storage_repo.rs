use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use anyhow::Context;
use parking_lot::Mutex;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// String key/value persistence with local storage semantics.
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()>;

    fn remove_item(&self, key: &str) -> anyhow::Result<()>;
}

#[derive(Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.items.lock().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.items.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> anyhow::Result<()> {
        self.items.lock().remove(key);
        Ok(())
    }
}

/// Keeps every item in a single JSON object on disk. The lock covers the
/// whole read-modify-write cycle.
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_items(&self) -> anyhow::Result<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read storage file {}", self.path.display()))?;
        if raw.trim().is_empty() {
            return Ok(HashMap::new());
        }

        serde_json::from_str(&raw)
            .with_context(|| format!("Storage file {} is not a JSON object of strings", self.path.display()))
    }

    /// Writes through a temporary file in the same directory and renames it
    /// over the storage file, so readers see either the old or the new items.
    fn write_items(
        &self,
        items: &HashMap<String, String>,
    ) -> anyhow::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !dir.exists() {
            debug!("Creating storage directory {}", dir.display());
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create storage directory {}", dir.display()))?;
        }

        let raw = serde_json::to_string_pretty(items)?;
        let res = NamedTempFile::new_in(dir)
            .and_then(|mut tmp| {
                tmp.write_all(raw.as_bytes())?;
                tmp.as_file().sync_all()?;
                Ok(tmp)
            })
            .map_err(anyhow::Error::from)
            .and_then(|tmp| tmp.persist(&self.path).map_err(anyhow::Error::from));

        match res {
            Ok(_) => Ok(()),
            Err(e) => {
                warn!("Failed to write storage file {} due to: {}", self.path.display(), e);
                Err(e)
            }
        }
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        let _guard = self.lock.lock();
        Ok(self.read_items()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let _guard = self.lock.lock();
        let mut items = self.read_items()?;
        items.insert(key.to_string(), value.to_string());
        self.write_items(&items)
    }

    fn remove_item(&self, key: &str) -> anyhow::Result<()> {
        let _guard = self.lock.lock();
        let mut items = self.read_items()?;
        if items.remove(key).is_some() {
            self.write_items(&items)?;
        }
        Ok(())
    }
}
