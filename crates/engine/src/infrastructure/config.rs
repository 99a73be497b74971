//! Environment-driven configuration.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use deeper_domain::{GestureConfig, QueuePolicy, DEFAULT_CATEGORY_CAP, DEFAULT_STACK_DEPTH};
use deeper_shared::storage_keys;

use super::storage::JsonFileStore;

/// `DEEPER_STORAGE_PATH` value that keeps progress in memory only.
pub const MEMORY_STORAGE: &str = ":memory:";

#[derive(Debug, Clone, PartialEq)]
pub enum StorageLocation {
    File(PathBuf),
    Memory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub storage: StorageLocation,
    pub progress_key: String,
    /// `None` uses the bundled demo catalog
    pub catalog_path: Option<PathBuf>,
    pub queue_policy: QueuePolicy,
    pub gesture: GestureConfig,
    pub stack_depth: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageLocation::File(JsonFileStore::default_path()),
            progress_key: storage_keys::PROGRESS.to_string(),
            catalog_path: None,
            queue_policy: QueuePolicy::default(),
            gesture: GestureConfig::default(),
            stack_depth: DEFAULT_STACK_DEPTH,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let storage = match var("DEEPER_STORAGE_PATH") {
            Some(v) if v == MEMORY_STORAGE => StorageLocation::Memory,
            Some(v) => StorageLocation::File(PathBuf::from(v)),
            None => defaults.storage,
        };

        let category_cap = parse_or("DEEPER_CATEGORY_CAP", var("DEEPER_CATEGORY_CAP"), DEFAULT_CATEGORY_CAP);
        let stack_depth = parse_or("DEEPER_STACK_DEPTH", var("DEEPER_STACK_DEPTH"), DEFAULT_STACK_DEPTH);

        let gesture_defaults = GestureConfig::default();
        let swipe_threshold = parse_or(
            "DEEPER_SWIPE_THRESHOLD",
            var("DEEPER_SWIPE_THRESHOLD"),
            gesture_defaults.swipe_threshold,
        );
        let velocity_threshold = parse_or(
            "DEEPER_VELOCITY_THRESHOLD",
            var("DEEPER_VELOCITY_THRESHOLD"),
            gesture_defaults.velocity_threshold,
        );
        let gesture = GestureConfig::new(swipe_threshold, velocity_threshold).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Invalid gesture thresholds, using defaults");
            gesture_defaults
        });

        Self {
            storage,
            progress_key: var("DEEPER_PROGRESS_KEY").unwrap_or(defaults.progress_key),
            catalog_path: var("DEEPER_CATALOG_PATH").map(PathBuf::from),
            queue_policy: QueuePolicy::with_cap(category_cap),
            gesture,
            stack_depth,
        }
    }
}

fn parse_or<T: FromStr + Copy>(name: &str, raw: Option<String>, default: T) -> T {
    let Some(raw) = raw else {
        return default;
    };
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(variable = name, value = %raw, "Unparseable configuration value, using default");
            default
        }
    }
}

/// Load `.env.local` then `.env` from the workspace root.
///
/// Existing process variables win; missing files are skipped.
pub fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| env.get(name).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = config_from(&[]);

        assert_eq!(config.progress_key, "deeper-progress");
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.queue_policy.per_category_cap, 10);
        assert_eq!(config.gesture, GestureConfig::default());
        assert_eq!(config.stack_depth, 4);
        assert!(matches!(config.storage, StorageLocation::File(_)));
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("DEEPER_STORAGE_PATH", "/tmp/deeper/storage.json"),
            ("DEEPER_PROGRESS_KEY", "couple-a"),
            ("DEEPER_CATALOG_PATH", "catalog.json"),
            ("DEEPER_CATEGORY_CAP", "3"),
            ("DEEPER_SWIPE_THRESHOLD", "80"),
            ("DEEPER_VELOCITY_THRESHOLD", "400.5"),
            ("DEEPER_STACK_DEPTH", "3"),
        ]);

        assert_eq!(
            config.storage,
            StorageLocation::File(PathBuf::from("/tmp/deeper/storage.json"))
        );
        assert_eq!(config.progress_key, "couple-a");
        assert_eq!(config.catalog_path, Some(PathBuf::from("catalog.json")));
        assert_eq!(config.queue_policy, QueuePolicy::with_cap(3));
        assert_eq!(config.gesture.swipe_threshold, 80.0);
        assert_eq!(config.gesture.velocity_threshold, 400.5);
        assert_eq!(config.stack_depth, 3);
    }

    #[test]
    fn memory_storage_marker() {
        let config = config_from(&[("DEEPER_STORAGE_PATH", ":memory:")]);
        assert_eq!(config.storage, StorageLocation::Memory);
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("DEEPER_CATEGORY_CAP", "ten"),
            ("DEEPER_STACK_DEPTH", "-1"),
            ("DEEPER_SWIPE_THRESHOLD", "-5"),
            ("DEEPER_PROGRESS_KEY", "   "),
        ]);

        assert_eq!(config.queue_policy.per_category_cap, 10);
        assert_eq!(config.stack_depth, 4);
        assert_eq!(config.gesture, GestureConfig::default());
        assert_eq!(config.progress_key, "deeper-progress");
    }
}
