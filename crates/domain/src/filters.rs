//! Category filter operations
//!
//! An empty filter set is a legitimate state ("show nothing"). It is kept
//! apart from "categories never loaded" by `UserProgress::filters_initialized`:
//! any explicit edit sets the marker, so an emptied set survives reloads.

use crate::{Category, CategoryId, ProgressEvent, UserProgress};

/// Flip one category in or out of the active set.
pub fn toggle_category(progress: &mut UserProgress, category_id: CategoryId) -> ProgressEvent {
    let active = progress.toggle_filter(category_id);
    ProgressEvent::FilterToggled {
        category_id,
        active,
    }
}

/// Replace the active set with every given category.
pub fn select_all(
    progress: &mut UserProgress,
    category_ids: impl IntoIterator<Item = CategoryId>,
) -> ProgressEvent {
    progress.replace_filters(category_ids);
    ProgressEvent::FiltersReplaced {
        filters: progress.current_filters().to_vec(),
    }
}

/// Empty the active set. The queue becomes empty until a filter is re-enabled.
pub fn clear_all(progress: &mut UserProgress) -> ProgressEvent {
    progress.replace_filters([]);
    ProgressEvent::FiltersReplaced {
        filters: Vec::new(),
    }
}

/// Populate an untouched, empty filter set once categories first arrive.
///
/// Fires only on the empty -> non-empty category transition (`previously_loaded`
/// is the category count before this load) and only if the user has never
/// shaped the filter set. Returns `None` when nothing changed.
pub fn initialize_filters(
    progress: &mut UserProgress,
    previously_loaded: usize,
    categories: &[Category],
) -> Option<ProgressEvent> {
    if previously_loaded > 0
        || categories.is_empty()
        || !progress.current_filters().is_empty()
        || progress.filters_initialized()
    {
        return None;
    }

    progress.replace_filters(categories.iter().map(|c| c.id));
    Some(ProgressEvent::FiltersInitialized {
        filters: progress.current_filters().to_vec(),
    })
}
