//! Entity modules wrapping domain state with its infrastructure.

mod catalog;
mod progress_store;

pub use catalog::{Catalog, Content};
pub use progress_store::ProgressStore;
