//! Write-through progress persistence.
//!
//! `ProgressStore` owns the single `UserProgress` value. Every change made
//! through [`ProgressStore::update`] is written to the key-value store before
//! `update` returns. A failed write leaves the in-memory value authoritative
//! and marks the store dirty; [`ProgressStore::flush`] retries.

use std::sync::Arc;

use deeper_domain::UserProgress;
use deeper_shared::ProgressSnapshot;

use crate::infrastructure::ports::{KeyValueStore, StoreError};

pub struct ProgressStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
    progress: UserProgress,
    dirty: bool,
}

impl ProgressStore {
    /// Load progress from `store`, falling back to empty progress when the
    /// key is missing, unreadable, or malformed. A malformed snapshot is
    /// copied to `<key>.corrupt` before anything can overwrite it.
    pub fn load(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let progress = match store.load(&key) {
            Ok(Some(raw)) => match ProgressSnapshot::from_json(&raw) {
                Ok(snapshot) => snapshot.into_progress(),
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "Malformed progress snapshot, starting fresh");
                    keep_unreadable(store.as_ref(), &key, &raw);
                    UserProgress::default()
                }
            },
            Ok(None) => {
                tracing::debug!(key = %key, "No stored progress, starting fresh");
                UserProgress::default()
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Progress storage unavailable, starting fresh");
                UserProgress::default()
            }
        };

        tracing::info!(
            key = %key,
            answered = progress.answered().len(),
            saved = progress.saved_for_later().len(),
            filters = progress.current_filters().len(),
            "Progress loaded"
        );

        Self {
            store,
            key,
            progress,
            dirty: false,
        }
    }

    pub fn progress(&self) -> &UserProgress {
        &self.progress
    }

    /// Whether the last write failed and has not been retried successfully.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Apply `change` and persist the result if anything changed.
    pub fn update<T>(&mut self, change: impl FnOnce(&mut UserProgress) -> T) -> T {
        let before = self.progress.clone();
        let result = change(&mut self.progress);
        if self.progress != before {
            self.persist();
        }
        result
    }

    /// Retry a failed write. No-op when nothing is pending.
    pub fn flush(&mut self) -> Result<(), StoreError> {
        if !self.dirty {
            return Ok(());
        }
        self.write()?;
        self.dirty = false;
        tracing::info!(key = %self.key, "Pending progress written");
        Ok(())
    }

    /// Forget all progress, in memory and in storage.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.progress = UserProgress::default();
        match self.store.remove(&self.key) {
            Ok(()) => {
                self.dirty = false;
                Ok(())
            }
            Err(e) => {
                // The old snapshot is still stored; a flush overwrites it
                self.dirty = true;
                Err(e)
            }
        }
    }

    fn persist(&mut self) {
        match self.write() {
            Ok(()) => self.dirty = false,
            Err(e) => {
                tracing::error!(key = %self.key, error = %e, "Failed to persist progress");
                self.dirty = true;
            }
        }
    }

    fn write(&self) -> Result<(), StoreError> {
        let json = ProgressSnapshot::from(&self.progress)
            .to_json()
            .map_err(StoreError::serialization)?;
        self.store.save(&self.key, &json)
    }
}

fn keep_unreadable(store: &dyn KeyValueStore, key: &str, raw: &str) {
    let backup = format!("{key}.corrupt");
    if let Err(e) = store.save(&backup, raw) {
        tracing::error!(key = %backup, error = %e, "Failed to keep malformed progress snapshot");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockKeyValueStore;
    use crate::infrastructure::storage::MemoryStore;
    use deeper_domain::{toggle_category, CategoryId};

    const KEY: &str = "deeper-progress";

    #[test]
    fn loads_stored_snapshot() {
        let mut kv = MockKeyValueStore::new();
        kv.expect_load()
            .withf(|key| key == KEY)
            .returning(|_| Ok(Some(r#"{"answeredQuestions":[4],"currentFilters":[1]}"#.into())));

        let store = ProgressStore::load(Arc::new(kv), KEY);

        assert_eq!(store.progress().answered().len(), 1);
        assert!(store.progress().has_filter(CategoryId::new(1)));
        assert!(!store.is_dirty());
    }

    #[test]
    fn malformed_or_unavailable_storage_starts_empty() {
        let mut corrupt = MockKeyValueStore::new();
        corrupt
            .expect_load()
            .returning(|_| Ok(Some("][".into())));
        corrupt
            .expect_save()
            .withf(|key, raw| key == "deeper-progress.corrupt" && raw == "][")
            .times(1)
            .returning(|_, _| Ok(()));
        assert_eq!(
            ProgressStore::load(Arc::new(corrupt), KEY).progress(),
            &UserProgress::default()
        );

        let mut down = MockKeyValueStore::new();
        down.expect_load()
            .returning(|_| Err(StoreError::unavailable("locked")));
        assert_eq!(
            ProgressStore::load(Arc::new(down), KEY).progress(),
            &UserProgress::default()
        );
    }

    #[test]
    fn malformed_snapshot_survives_the_next_write() {
        let kv = Arc::new(MemoryStore::new());
        kv.save(KEY, "{\"answeredQuestions\": [1, 2").expect("seed");

        let mut store = ProgressStore::load(kv.clone(), KEY);
        store.update(|p| toggle_category(p, CategoryId::new(1)));

        assert_eq!(
            kv.load("deeper-progress.corrupt").expect("load").as_deref(),
            Some("{\"answeredQuestions\": [1, 2")
        );
        assert!(store.progress().has_filter(CategoryId::new(1)));
    }

    #[test]
    fn stray_element_keeps_the_rest_of_progress() {
        let kv = Arc::new(MemoryStore::new());
        kv.save(
            KEY,
            r#"{"answeredQuestions":[1,2,3],"savedForLater":[4],"currentFilters":[1,null]}"#,
        )
        .expect("seed");

        let store = ProgressStore::load(kv.clone(), KEY);

        assert_eq!(store.progress().answered().len(), 3);
        assert_eq!(store.progress().saved_for_later().len(), 1);
        assert!(store.progress().has_filter(CategoryId::new(1)));
        assert_eq!(kv.load("deeper-progress.corrupt").expect("load"), None);
    }

    #[test]
    fn every_change_is_written_through() {
        let kv = Arc::new(MemoryStore::new());
        let mut store = ProgressStore::load(kv.clone(), KEY);

        store.update(|p| toggle_category(p, CategoryId::new(3)));

        let raw = kv.load(KEY).expect("load").expect("written");
        let reloaded = ProgressSnapshot::from_json(&raw)
            .expect("valid snapshot")
            .into_progress();
        assert_eq!(&reloaded, store.progress());
    }

    #[test]
    fn unchanged_progress_is_not_written() {
        let mut kv = MockKeyValueStore::new();
        kv.expect_load().returning(|_| Ok(None));
        kv.expect_save().never();

        let mut store = ProgressStore::load(Arc::new(kv), KEY);
        let seen = store.update(|p| p.answered().len());

        assert_eq!(seen, 0);
    }

    #[test]
    fn failed_write_marks_dirty_and_flush_retries() {
        let mut kv = MockKeyValueStore::new();
        kv.expect_load().returning(|_| Ok(None));
        let mut attempts = 0;
        kv.expect_save().times(2).returning(move |_, _| {
            attempts += 1;
            if attempts == 1 {
                Err(StoreError::io("write_storage_file", "disk full"))
            } else {
                Ok(())
            }
        });

        let mut store = ProgressStore::load(Arc::new(kv), KEY);
        store.update(|p| toggle_category(p, CategoryId::new(1)));

        assert!(store.is_dirty());
        assert!(store.progress().has_filter(CategoryId::new(1)));

        store.flush().expect("retry succeeds");
        assert!(!store.is_dirty());
        store.flush().expect("nothing pending");
    }

    #[test]
    fn reset_clears_memory_and_storage() {
        let kv = Arc::new(MemoryStore::new());
        let mut store = ProgressStore::load(kv.clone(), KEY);
        store.update(|p| toggle_category(p, CategoryId::new(2)));

        store.reset().expect("reset");

        assert_eq!(store.progress(), &UserProgress::default());
        assert_eq!(kv.load(KEY).expect("load"), None);
    }
}
