//! User progress - the durable per-device record of swipe outcomes
//!
//! All collections have set semantics but keep insertion order, so a
//! persisted snapshot reads back in the order the user acted. Mutators are
//! crate-private: the only way to change progress from outside the domain is
//! through the swipe, filter, and requeue operations, which keep
//! `answered ∩ saved_for_later = ∅`.

use std::collections::BTreeMap;

use crate::{CategoryId, QuestionId};

/// Per-user progress: outcomes, active filters, and quota consumption.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserProgress {
    answered: Vec<QuestionId>,
    saved_for_later: Vec<QuestionId>,
    current_filters: Vec<CategoryId>,
    shown_per_category: BTreeMap<CategoryId, u32>,
    /// Whether the filter set reflects a deliberate state (auto-initialized
    /// or user-edited) rather than "categories never loaded yet".
    filters_initialized: bool,
}

impl UserProgress {
    /// Rebuild progress from possibly untrusted parts.
    ///
    /// Duplicates are dropped (first occurrence wins). A question listed as
    /// both answered and saved stays answered. When `filters_initialized` is
    /// unknown it is inferred from whether any filter is set.
    pub fn from_parts(
        answered: impl IntoIterator<Item = QuestionId>,
        saved_for_later: impl IntoIterator<Item = QuestionId>,
        current_filters: impl IntoIterator<Item = CategoryId>,
        shown_per_category: impl IntoIterator<Item = (CategoryId, u32)>,
        filters_initialized: Option<bool>,
    ) -> Self {
        let answered = dedup(answered);
        let saved_for_later = dedup(saved_for_later)
            .into_iter()
            .filter(|id| !answered.contains(id))
            .collect();
        let current_filters = dedup(current_filters);
        let filters_initialized = filters_initialized.unwrap_or(!current_filters.is_empty());

        let mut shown = BTreeMap::new();
        for (category_id, count) in shown_per_category {
            shown.insert(category_id, count);
        }

        Self {
            answered,
            saved_for_later,
            current_filters,
            shown_per_category: shown,
            filters_initialized,
        }
    }

    pub fn answered(&self) -> &[QuestionId] {
        &self.answered
    }

    pub fn saved_for_later(&self) -> &[QuestionId] {
        &self.saved_for_later
    }

    pub fn current_filters(&self) -> &[CategoryId] {
        &self.current_filters
    }

    pub fn shown_per_category(&self) -> &BTreeMap<CategoryId, u32> {
        &self.shown_per_category
    }

    pub fn filters_initialized(&self) -> bool {
        self.filters_initialized
    }

    pub fn is_answered(&self, id: QuestionId) -> bool {
        self.answered.contains(&id)
    }

    pub fn is_saved(&self, id: QuestionId) -> bool {
        self.saved_for_later.contains(&id)
    }

    /// Whether the question already resolved to one of the two outcomes.
    pub fn is_resolved(&self, id: QuestionId) -> bool {
        self.is_answered(id) || self.is_saved(id)
    }

    pub fn has_filter(&self, category_id: CategoryId) -> bool {
        self.current_filters.contains(&category_id)
    }

    /// Non-premium questions of this category advanced past so far (0 if unknown).
    pub fn shown_count(&self, category_id: CategoryId) -> u32 {
        self.shown_per_category
            .get(&category_id)
            .copied()
            .unwrap_or(0)
    }

    // ---------------------------------------------------------------------
    // Mutators (crate-private; see module docs)
    // ---------------------------------------------------------------------

    /// Returns `false` when the id was already present.
    pub(crate) fn mark_answered(&mut self, id: QuestionId) -> bool {
        insert_unique(&mut self.answered, id)
    }

    /// Returns `false` when the id was already present.
    pub(crate) fn mark_saved(&mut self, id: QuestionId) -> bool {
        insert_unique(&mut self.saved_for_later, id)
    }

    /// Returns `false` when the id was not saved.
    pub(crate) fn unsave(&mut self, id: QuestionId) -> bool {
        let before = self.saved_for_later.len();
        self.saved_for_later.retain(|saved| *saved != id);
        self.saved_for_later.len() != before
    }

    /// Returns the new count.
    pub(crate) fn record_shown(&mut self, category_id: CategoryId) -> u32 {
        let count = self.shown_per_category.entry(category_id).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    /// Returns whether the category is active after the flip.
    pub(crate) fn toggle_filter(&mut self, category_id: CategoryId) -> bool {
        self.filters_initialized = true;
        if self.has_filter(category_id) {
            self.current_filters.retain(|id| *id != category_id);
            false
        } else {
            self.current_filters.push(category_id);
            true
        }
    }

    pub(crate) fn replace_filters(&mut self, filters: impl IntoIterator<Item = CategoryId>) {
        self.filters_initialized = true;
        self.current_filters = dedup(filters);
    }
}

fn insert_unique<T: PartialEq>(items: &mut Vec<T>, item: T) -> bool {
    if items.contains(&item) {
        false
    } else {
        items.push(item);
        true
    }
}

fn dedup<T: PartialEq>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut out = Vec::new();
    for item in items {
        insert_unique(&mut out, item);
    }
    out
}
