//! Catalog content adapters.

use std::collections::BTreeSet;

use deeper_domain::{CategoryId, Question};

mod bundled;
mod json_file;

pub use bundled::BundledCatalog;
pub use json_file::JsonCatalogSource;

/// Keep only questions whose category is in `category_ids` (all when `None`).
fn narrow(questions: Vec<Question>, category_ids: Option<&BTreeSet<CategoryId>>) -> Vec<Question> {
    match category_ids {
        Some(ids) => questions
            .into_iter()
            .filter(|q| ids.contains(&q.category_id))
            .collect(),
        None => questions,
    }
}
