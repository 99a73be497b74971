//! The swipe session: one user's progress over one loaded catalog.
//!
//! The session is the single owner of progress. Reads go through a memoized
//! visible queue; every mutation drops the memo so the next read recomputes
//! from the current progress. There is no cursor into the queue.

use deeper_domain::{
    clear_all, commit_swipe, compute_visible_queue, initialize_filters, move_to_top, select_all,
    toggle_category, CategoryId, CommitOutcome, DragRelease, GestureConfig, GestureDecision,
    JournalView, ProgressEvent, QueuePolicy, QuestionId, RejectReason, SwipeDirection,
    UserProgress, VisibleQueue,
};

use crate::entities::{Catalog, ProgressStore};
use crate::infrastructure::ports::StoreError;

/// Result of releasing a drag on the frontmost card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The drag did not cross a threshold; the card goes back to rest
    Cancelled,
    Swiped(CommitOutcome),
}

pub struct SwipeSession {
    store: ProgressStore,
    catalog: Catalog,
    policy: QueuePolicy,
    gesture: GestureConfig,
    queue: Option<VisibleQueue>,
}

impl SwipeSession {
    /// Start a session with an empty catalog; call [`Self::apply_catalog`]
    /// once content has loaded.
    pub fn new(store: ProgressStore, policy: QueuePolicy, gesture: GestureConfig) -> Self {
        Self {
            store,
            catalog: Catalog::empty(),
            policy,
            gesture,
            queue: None,
        }
    }

    pub fn progress(&self) -> &UserProgress {
        self.store.progress()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn policy(&self) -> QueuePolicy {
        self.policy
    }

    /// Whether a progress write is waiting for [`Self::flush`].
    pub fn has_pending_write(&self) -> bool {
        self.store.is_dirty()
    }

    /// Swap in a fully loaded catalog.
    ///
    /// On the first non-empty load, an untouched filter set is populated with
    /// every category.
    pub fn apply_catalog(&mut self, catalog: Catalog) -> Option<ProgressEvent> {
        let previously_loaded = self.catalog.categories().len();
        self.catalog = catalog;
        self.invalidate();

        let categories = self.catalog.categories();
        let event = self
            .store
            .update(|progress| initialize_filters(progress, previously_loaded, categories));
        if let Some(event) = &event {
            log_event(event);
        }
        event
    }

    /// The ordered candidate list, recomputed only after a change.
    pub fn queue(&mut self) -> &VisibleQueue {
        let catalog = &self.catalog;
        let progress = self.store.progress();
        let policy = self.policy;
        self.queue.get_or_insert_with(|| {
            compute_visible_queue(catalog.questions(), catalog.categories(), progress, policy)
        })
    }

    /// Interpret a drag release on the frontmost card.
    ///
    /// A cancelled gesture leaves progress untouched.
    pub fn release(&mut self, release: DragRelease) -> ReleaseOutcome {
        match self.gesture.classify_release(release) {
            GestureDecision::Cancel => {
                tracing::debug!(
                    offset_x = release.offset_x,
                    velocity_x = release.velocity_x,
                    "Gesture cancelled"
                );
                ReleaseOutcome::Cancelled
            }
            GestureDecision::Right => ReleaseOutcome::Swiped(self.swipe_head(SwipeDirection::Right)),
            GestureDecision::Left => ReleaseOutcome::Swiped(self.swipe_head(SwipeDirection::Left)),
        }
    }

    /// Commit a swipe on whatever card is currently frontmost.
    pub fn swipe_head(&mut self, direction: SwipeDirection) -> CommitOutcome {
        match self.queue().head().map(|q| q.id) {
            Some(head) => self.commit_swipe(direction, head),
            None => {
                tracing::debug!(direction = %direction, "Swipe ignored, queue is empty");
                CommitOutcome::Rejected(RejectReason::EmptyQueue)
            }
        }
    }

    /// Commit a swipe for `question_id`, which must be the frontmost card.
    pub fn commit_swipe(&mut self, direction: SwipeDirection, question_id: QuestionId) -> CommitOutcome {
        let queue = self.queue().clone();
        let outcome = self
            .store
            .update(|progress| commit_swipe(progress, &queue, direction, question_id));

        match &outcome {
            CommitOutcome::Committed(event) => {
                self.invalidate();
                log_event(event);
            }
            CommitOutcome::Rejected(reason) => {
                tracing::warn!(
                    question_id = %question_id,
                    direction = %direction,
                    reason = ?reason,
                    "Swipe rejected"
                );
            }
        }
        outcome
    }

    pub fn toggle_category(&mut self, category_id: CategoryId) -> ProgressEvent {
        let event = self
            .store
            .update(|progress| toggle_category(progress, category_id));
        self.after_change(&event);
        event
    }

    /// Turn on every loaded category.
    pub fn select_all(&mut self) -> ProgressEvent {
        let ids: Vec<CategoryId> = self.catalog.category_ids().collect();
        let event = self.store.update(|progress| select_all(progress, ids));
        self.after_change(&event);
        event
    }

    pub fn clear_all(&mut self) -> ProgressEvent {
        let event = self.store.update(clear_all);
        self.after_change(&event);
        event
    }

    /// Take a question out of saved-for-later so it can be dealt again.
    ///
    /// Returns `None` when the question was not saved.
    pub fn move_to_top(&mut self, question_id: QuestionId) -> Option<ProgressEvent> {
        let event = self
            .store
            .update(|progress| move_to_top(progress, question_id));
        match &event {
            Some(event) => self.after_change(event),
            None => tracing::debug!(question_id = %question_id, "Requeue ignored, not saved"),
        }
        event
    }

    pub fn journal(&self) -> JournalView {
        JournalView::build(
            self.catalog.questions(),
            self.catalog.categories(),
            self.store.progress(),
        )
    }

    /// Retry a progress write that failed earlier.
    pub fn flush(&mut self) -> Result<(), StoreError> {
        self.store.flush()
    }

    /// Forget all progress and start over as on a fresh install.
    pub fn reset(&mut self) -> Result<Option<ProgressEvent>, StoreError> {
        let result = self.store.reset();
        self.invalidate();
        tracing::info!("Progress reset");

        // Filters are re-initialized even if the stored copy could not be removed
        let categories = self.catalog.categories();
        let event = self
            .store
            .update(|progress| initialize_filters(progress, 0, categories));
        if let Some(event) = &event {
            log_event(event);
        }
        result.map(|()| event)
    }

    fn after_change(&mut self, event: &ProgressEvent) {
        self.invalidate();
        log_event(event);
    }

    fn invalidate(&mut self) {
        self.queue = None;
    }
}

fn log_event(event: &ProgressEvent) {
    match event {
        ProgressEvent::Swiped {
            question_id,
            category_id,
            direction,
            quota_consumed,
            shown_count,
        } => tracing::info!(
            event = event.kind(),
            question_id = %question_id,
            category_id = %category_id,
            direction = %direction,
            quota_consumed,
            shown_count,
            "Swipe committed"
        ),
        ProgressEvent::FilterToggled {
            category_id,
            active,
        } => tracing::info!(
            event = event.kind(),
            category_id = %category_id,
            active,
            "Category filter toggled"
        ),
        ProgressEvent::FiltersReplaced { filters } | ProgressEvent::FiltersInitialized { filters } => {
            tracing::info!(event = event.kind(), filters = filters.len(), "Category filters replaced")
        }
        ProgressEvent::Requeued { question_id } => tracing::info!(
            event = event.kind(),
            question_id = %question_id,
            "Question requeued"
        ),
    }
}
