//! Question entity - a single discussion prompt

use crate::{CategoryId, DomainError, QuestionId};

/// A discussion prompt belonging to exactly one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub category_id: CategoryId,
    /// Premium questions stay visible after the category's free quota is spent
    pub is_premium: bool,
}

impl Question {
    /// Build a question, rejecting blank prompt text.
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        category_id: CategoryId,
    ) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "Question {id} has empty text"
            )));
        }
        Ok(Self {
            id,
            text,
            category_id,
            is_premium: false,
        })
    }

    pub fn premium(mut self) -> Self {
        self.is_premium = true;
        self
    }

    pub fn with_premium(mut self, is_premium: bool) -> Self {
        self.is_premium = is_premium;
        self
    }
}
