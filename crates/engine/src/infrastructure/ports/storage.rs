//! Durable key-value storage for the progress snapshot.

use super::StoreError;

/// String key-value persistence.
///
/// Writes are synchronous: a mutation is durable (or has failed) by the time
/// `save` returns.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Load a value by key, `Ok(None)` when the key was never written.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Save a value under the given key, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
