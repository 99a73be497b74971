//! Shared builders for engine unit tests.

use std::sync::Arc;

use deeper_domain::{
    Category, CategoryId, CategoryStyle, GestureConfig, Question, QuestionId, QueuePolicy,
};

use crate::entities::{Catalog, ProgressStore};
use crate::infrastructure::ports::KeyValueStore;
use crate::infrastructure::storage::MemoryStore;
use crate::use_cases::SwipeSession;

pub const PROGRESS_KEY: &str = "deeper-progress";

pub fn category(id: i64) -> Category {
    Category::new(
        CategoryId::new(id),
        format!("Category {id}"),
        "heart",
        id as i32,
        CategoryStyle::solid("#000000", "#ffffff"),
    )
}

pub fn question(id: i64, category_id: i64) -> Question {
    Question::new(
        QuestionId::new(id),
        format!("Question {id}?"),
        CategoryId::new(category_id),
    )
    .expect("valid question")
}

/// Catalog with categories `1..=categories` and the given `(id, category)` questions.
pub fn catalog(categories: i64, questions: &[(i64, i64)]) -> Catalog {
    Catalog::new(
        (1..=categories).map(category).collect(),
        questions.iter().map(|(id, cat)| question(*id, *cat)).collect(),
    )
}

/// Session over a fresh in-memory store, with default thresholds.
pub fn session_with_store(store: Arc<dyn KeyValueStore>, cap: u32) -> SwipeSession {
    SwipeSession::new(
        ProgressStore::load(store, PROGRESS_KEY),
        QueuePolicy::with_cap(cap),
        GestureConfig::default(),
    )
}

pub fn memory_session(cap: u32) -> (Arc<MemoryStore>, SwipeSession) {
    let store = Arc::new(MemoryStore::new());
    let session = session_with_store(store.clone(), cap);
    (store, session)
}

pub fn head_id(session: &mut SwipeSession) -> Option<i64> {
    session.queue().head().map(|q| q.id.as_i64())
}

pub fn queue_ids(session: &mut SwipeSession) -> Vec<i64> {
    session
        .queue()
        .questions()
        .iter()
        .map(|q| q.id.as_i64())
        .collect()
}
