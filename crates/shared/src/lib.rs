//! Deeper Shared - formats exchanged with the engine's collaborators
//!
//! - Catalog DTOs in the content backend's camelCase JSON
//! - The persisted progress snapshot layout
//!
//! # Design Principles
//!
//! 1. **No business logic** - conversion and normalization only
//! 2. **Lenient decoding** - bad records are skipped and logged, never fatal
//! 3. **Raw integer ids** in DTOs; domain ids appear only after conversion

pub mod dto;
pub mod progress;

pub use dto::{CatalogDto, CatalogRecords, CategoryDto, QuestionDto};
pub use progress::{storage_keys, ProgressSnapshot, SnapshotError};
