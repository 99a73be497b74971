//! Use cases - User story orchestration.
//!
//! Use cases orchestrate across entity modules to fulfill user stories.

pub mod swipe;

pub use swipe::{RefreshCatalog, ReleaseOutcome, SwipeSession};
