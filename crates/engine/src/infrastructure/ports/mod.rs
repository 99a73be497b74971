//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Progress persistence (could swap the JSON file for a platform keychain or browser storage)
//! - Catalog content (could swap the bundled catalog for the content API)

mod content;
mod error;
mod storage;

pub use content::ContentSource;
pub use error::{ContentError, StoreError};
pub use storage::KeyValueStore;

#[cfg(test)]
pub use content::MockContentSource;
#[cfg(test)]
pub use storage::MockKeyValueStore;
