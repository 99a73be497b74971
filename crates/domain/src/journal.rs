//! Conversation journal: saved/discussed listings and requeueing.

use std::collections::HashMap;

use crate::{Category, CategoryId, ProgressEvent, Question, QuestionId, UserProgress};

/// Put a saved question back into circulation.
///
/// Removes it from saved-for-later only. The quota it consumed when first
/// shown is not refunded, so if its category is at the cap a non-premium
/// question stays hidden. Returns `None` if the question was not saved.
pub fn move_to_top(progress: &mut UserProgress, question_id: QuestionId) -> Option<ProgressEvent> {
    progress
        .unsave(question_id)
        .then_some(ProgressEvent::Requeued { question_id })
}

/// A question listed in the journal, with its category when known.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntry {
    pub question: Question,
    pub category: Option<Category>,
}

/// Saved and discussed questions, in catalog order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JournalView {
    pub saved: Vec<JournalEntry>,
    pub discussed: Vec<JournalEntry>,
    pub total_questions: usize,
}

impl JournalView {
    pub fn build(questions: &[Question], categories: &[Category], progress: &UserProgress) -> Self {
        let by_id: HashMap<CategoryId, &Category> = categories.iter().map(|c| (c.id, c)).collect();
        let entry = |question: &Question| JournalEntry {
            question: question.clone(),
            category: by_id.get(&question.category_id).map(|c| (*c).clone()),
        };

        Self {
            saved: questions
                .iter()
                .filter(|q| progress.is_saved(q.id))
                .map(entry)
                .collect(),
            discussed: questions
                .iter()
                .filter(|q| progress.is_answered(q.id))
                .map(entry)
                .collect(),
            total_questions: questions.len(),
        }
    }

    pub fn saved_count(&self) -> usize {
        self.saved.len()
    }

    pub fn discussed_count(&self) -> usize {
        self.discussed.len()
    }

    /// Discussed share of the catalog, rounded half-up to a whole percent.
    pub fn progress_percent(&self) -> u8 {
        if self.total_questions == 0 {
            return 0;
        }
        let discussed = self.discussed.len().min(self.total_questions);
        let percent = (200 * discussed + self.total_questions) / (2 * self.total_questions);
        u8::try_from(percent).unwrap_or(100)
    }
}
