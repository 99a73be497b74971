//! Swipe use cases: the session orchestrator and catalog refresh.

mod refresh;
mod session;

pub use refresh::RefreshCatalog;
pub use session::{ReleaseOutcome, SwipeSession};
