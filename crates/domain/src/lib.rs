//! Deeper domain: categories, questions, user progress, and the rules that
//! decide which question card is shown next.
//!
//! Everything here is synchronous, allocation-light, and free of I/O.
//! Progress is always passed in explicitly (`&UserProgress` / `&mut UserProgress`);
//! nothing is held in ambient state.

pub mod entities;
pub mod error;
pub mod events;
pub mod filters;
pub mod ids;
pub mod journal;
pub mod queue;
pub mod swipe;
pub mod value_objects;

#[cfg(test)]
mod test_fixtures;


pub use entities::{
    sort_categories, Category, CategoryStyle, Fill, FillType, Question, DEFAULT_BORDER_COLOR,
    DEFAULT_BORDER_WIDTH, DEFAULT_GRADIENT_ANGLE, DEFAULT_TEXT_COLOR,
};
pub use error::DomainError;
pub use events::ProgressEvent;
pub use filters::{clear_all, initialize_filters, select_all, toggle_category};
pub use ids::{CategoryId, QuestionId};
pub use journal::{move_to_top, JournalEntry, JournalView};
pub use queue::{
    compute_visible_queue, QueuePolicy, VisibleQueue, DEFAULT_CATEGORY_CAP, DEFAULT_STACK_DEPTH,
};
pub use swipe::{commit_swipe, CommitOutcome, RejectReason};
pub use value_objects::{
    DragRelease, GestureConfig, GestureDecision, SwipeDirection, UserProgress,
    DEFAULT_SWIPE_THRESHOLD, DEFAULT_VELOCITY_THRESHOLD,
};
