//! Domain Events
//!
//! Every progress mutation returns one of these, describing what changed so
//! the persistence collaborator and the front end can react.

use crate::{CategoryId, QuestionId, SwipeDirection};

/// A change applied to `UserProgress`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// A queue head was resolved by a committed swipe
    Swiped {
        question_id: QuestionId,
        category_id: CategoryId,
        direction: SwipeDirection,
        /// Whether this swipe consumed free quota (non-premium only)
        quota_consumed: bool,
        /// Category shown-count after the swipe
        shown_count: u32,
    },
    /// A single category was switched on or off
    FilterToggled {
        category_id: CategoryId,
        active: bool,
    },
    /// The whole filter set was replaced (select all / clear all)
    FiltersReplaced { filters: Vec<CategoryId> },
    /// First load of categories populated an empty, never-touched filter set
    FiltersInitialized { filters: Vec<CategoryId> },
    /// A saved question was made eligible for the queue again
    Requeued { question_id: QuestionId },
}

impl ProgressEvent {
    /// Short machine-friendly name, used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Swiped { .. } => "swiped",
            Self::FilterToggled { .. } => "filter_toggled",
            Self::FiltersReplaced { .. } => "filters_replaced",
            Self::FiltersInitialized { .. } => "filters_initialized",
            Self::Requeued { .. } => "requeued",
        }
    }
}
