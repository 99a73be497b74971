//! Deeper Engine library.
//!
//! Everything around the pure swipe rules: persistence, catalog loading,
//! the session that ties them together, and a terminal front end.
//!
//! ## Structure
//!
//! - `entities/` - Progress store and catalog, wrapping domain state with its ports
//! - `use_cases/` - The swipe session and catalog refresh
//! - `infrastructure/` - External dependency implementations (ports + adapters) and config
//! - `api/` - Terminal command parsing and rendering
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod entities;
pub mod infrastructure;
pub mod use_cases;

/// Shared builders for unit tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
