//! JSON file key-value store.
//!
//! Stores key-value pairs in a single JSON object on disk, by default at:
//! - Linux: ~/.config/deeper/storage.json
//! - macOS: ~/Library/Application Support/app.deeper.deeper/storage.json
//! - Windows: C:\Users\<User>\AppData\Roaming\deeper\deeper\config\storage.json

use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use directories::ProjectDirs;
use tempfile::NamedTempFile;

use crate::infrastructure::ports::{KeyValueStore, StoreError};

const STORAGE_FILE: &str = "storage.json";
const CORRUPT_SUFFIX: &str = "corrupt";

pub struct JsonFileStore {
    /// Path to the storage file
    path: PathBuf,
    /// In-memory copy of the file; authoritative when a write fails
    cache: RwLock<HashMap<String, String>>,
    /// Set while an unreadable file is still in place; writes would destroy it
    blocked: AtomicBool,
}

impl JsonFileStore {
    /// Platform config directory, falling back to the working directory.
    pub fn default_path() -> PathBuf {
        match ProjectDirs::from("app", "deeper", "deeper") {
            Some(dirs) => dirs.config_dir().join(STORAGE_FILE),
            None => PathBuf::from("deeper_storage.json"),
        }
    }

    /// Open the store, loading existing data if the file exists.
    ///
    /// An unreadable or corrupt file is moved aside to `<file>.corrupt` and
    /// the store starts empty. If it cannot be moved, writes are refused
    /// until it can, so the old file is never overwritten with less data.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (cache, blocked) = match read_file(&path) {
            Ok(cache) => (cache, false),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Storage file unusable, starting empty");
                (HashMap::new(), !set_aside(&path))
            }
        };

        tracing::debug!(path = %path.display(), keys = cache.len(), "File storage initialized");

        Self {
            path,
            cache: RwLock::new(cache),
            blocked: AtomicBool::new(blocked),
        }
    }

    /// Write the cache to disk.
    ///
    /// The document goes to a temporary file in the same directory which then
    /// replaces the old file, so a crash mid-write leaves the previous version.
    fn persist(&self) -> Result<(), StoreError> {
        if self.blocked.load(Ordering::Acquire) {
            if !set_aside(&self.path) {
                return Err(StoreError::unavailable(format!(
                    "unreadable storage file {} could not be moved aside",
                    self.path.display()
                )));
            }
            self.blocked.store(false, Ordering::Release);
        }

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| StoreError::io("create_storage_dir", e))?;

        let data = {
            let cache = self
                .cache
                .read()
                .map_err(|e| StoreError::unavailable(e.to_string()))?;
            serde_json::to_string_pretty(&*cache).map_err(StoreError::serialization)?
        };

        let mut file =
            NamedTempFile::new_in(&dir).map_err(|e| StoreError::io("create_temp_file", e))?;
        file.write_all(data.as_bytes())
            .map_err(|e| StoreError::io("write_storage_file", e))?;
        file.as_file()
            .sync_all()
            .map_err(|e| StoreError::io("sync_storage_file", e))?;
        file.persist(&self.path)
            .map_err(|e| StoreError::io("replace_storage_file", e))?;
        Ok(())
    }
}

fn corrupt_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(CORRUPT_SUFFIX);
    PathBuf::from(name)
}

/// Move an unusable storage file out of the way. True when nothing is left
/// at `path`.
fn set_aside(path: &Path) -> bool {
    let target = corrupt_path(path);
    match fs::rename(path, &target) {
        Ok(()) => {
            tracing::warn!(path = %path.display(), moved_to = %target.display(), "Moved unusable storage file aside");
            true
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => true,
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to move unusable storage file aside");
            false
        }
    }
}

fn read_file(path: &Path) -> Result<HashMap<String, String>, StoreError> {
    if !path.exists() {
        return Ok(HashMap::new());
    }

    let data = fs::read_to_string(path).map_err(|e| StoreError::io("read_storage_file", e))?;
    serde_json::from_str(&data).map_err(StoreError::serialization)
}

impl KeyValueStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let cache = self
            .cache
            .read()
            .map_err(|e| StoreError::unavailable(e.to_string()))?;
        Ok(cache.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        {
            let mut cache = self
                .cache
                .write()
                .map_err(|e| StoreError::unavailable(e.to_string()))?;
            cache.insert(key.to_string(), value.to_string());
        } // Release lock before I/O
        self.persist()
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let removed = {
            let mut cache = self
                .cache
                .write()
                .map_err(|e| StoreError::unavailable(e.to_string()))?;
            cache.remove(key).is_some()
        };
        if removed {
            self.persist()?;
        }
        Ok(())
    }
}
