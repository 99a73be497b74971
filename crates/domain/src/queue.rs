//! Visible queue selection
//!
//! The queue is re-derived from scratch on every read: there is no cursor
//! into it, so a committed swipe or a filter change can never leave a stale
//! "current index" behind. Output order is exactly the input question order.

use std::collections::HashSet;

use crate::{Category, CategoryId, Question, QuestionId, UserProgress};

/// Free (non-premium) questions surfaced per category before only premium ones remain.
pub const DEFAULT_CATEGORY_CAP: u32 = 10;

/// Cards the front end draws on the stack by default.
pub const DEFAULT_STACK_DEPTH: usize = 4;

/// Selection parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueuePolicy {
    pub per_category_cap: u32,
}

impl Default for QueuePolicy {
    fn default() -> Self {
        Self {
            per_category_cap: DEFAULT_CATEGORY_CAP,
        }
    }
}

impl QueuePolicy {
    pub fn with_cap(per_category_cap: u32) -> Self {
        Self { per_category_cap }
    }
}

/// Ordered list of questions still eligible for display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisibleQueue {
    questions: Vec<Question>,
    quota_exhausted: Vec<CategoryId>,
}

impl VisibleQueue {
    /// The frontmost (interactive) card.
    pub fn head(&self) -> Option<&Question> {
        self.questions.first()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn ids(&self) -> Vec<QuestionId> {
        self.questions.iter().map(|q| q.id).collect()
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.questions.iter().any(|q| q.id == id)
    }

    /// The first `depth` candidates, for drawing a card stack.
    pub fn window(&self, depth: usize) -> &[Question] {
        &self.questions[..depth.min(self.questions.len())]
    }

    /// Filtered-in categories whose free quota is spent while unresolved
    /// free questions remain. Listed in category display order.
    pub fn quota_exhausted(&self) -> &[CategoryId] {
        &self.quota_exhausted
    }
}

/// Compute the ordered visible queue.
///
/// A question is included when its category is known and filtered in, it has
/// been neither answered nor saved, and it is premium or its category's
/// shown-count is below the cap. Never fails; empty inputs give an empty queue.
pub fn compute_visible_queue(
    questions: &[Question],
    categories: &[Category],
    progress: &UserProgress,
    policy: QueuePolicy,
) -> VisibleQueue {
    let known: HashSet<CategoryId> = categories.iter().map(|c| c.id).collect();
    let filters: HashSet<CategoryId> = progress.current_filters().iter().copied().collect();
    let answered: HashSet<QuestionId> = progress.answered().iter().copied().collect();
    let saved: HashSet<QuestionId> = progress.saved_for_later().iter().copied().collect();

    let mut exhausted: HashSet<CategoryId> = HashSet::new();
    let mut visible = Vec::new();

    for question in questions {
        // Orphans (unknown category) are never shown
        if !known.contains(&question.category_id) || !filters.contains(&question.category_id) {
            continue;
        }
        if answered.contains(&question.id) || saved.contains(&question.id) {
            continue;
        }
        if !question.is_premium
            && progress.shown_count(question.category_id) >= policy.per_category_cap
        {
            exhausted.insert(question.category_id);
            continue;
        }
        visible.push(question.clone());
    }

    let quota_exhausted = categories
        .iter()
        .map(|c| c.id)
        .filter(|id| exhausted.contains(id))
        .collect();

    VisibleQueue {
        questions: visible,
        quota_exhausted,
    }
}
