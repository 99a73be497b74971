//! Shared builders for unit tests.

use crate::{Category, CategoryId, CategoryStyle, Question, QuestionId, UserProgress};

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

/// Progress with only the given filters active.
pub fn filtered(category_ids: &[i64]) -> UserProgress {
    UserProgress::from_parts(
        [],
        [],
        category_ids.iter().map(|id| CategoryId::new(*id)),
        [],
        None,
    )
}
