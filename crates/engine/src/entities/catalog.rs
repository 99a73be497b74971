//! Catalog entity module.
//!
//! A `Catalog` is a fully loaded snapshot of categories and questions. While
//! a load is in flight the session keeps using the previous (initially empty)
//! catalog, so partial data never reaches the queue.

use std::collections::BTreeMap;
use std::sync::Arc;

use deeper_domain::{sort_categories, Category, CategoryId, Question, QuestionId};

use crate::infrastructure::ports::{ContentError, ContentSource};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    categories: Vec<Category>,
    questions: Vec<Question>,
}

impl Catalog {
    /// Build a catalog; categories are put in display order, questions keep
    /// the order they were given in.
    pub fn new(mut categories: Vec<Category>, questions: Vec<Question>) -> Self {
        sort_categories(&mut categories);
        Self {
            categories,
            questions,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn category_ids(&self) -> impl Iterator<Item = CategoryId> + '_ {
        self.categories.iter().map(|c| c.id)
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Number of questions per loaded category (zero for empty categories).
    ///
    /// Orphaned questions are not counted.
    pub fn question_count_by_category(&self) -> BTreeMap<CategoryId, usize> {
        let mut counts: BTreeMap<CategoryId, usize> =
            self.category_ids().map(|id| (id, 0)).collect();
        for question in &self.questions {
            if let Some(count) = counts.get_mut(&question.category_id) {
                *count += 1;
            }
        }
        counts
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.questions.is_empty()
    }
}

/// Content entity - loads catalogs from the content source.
pub struct Content {
    source: Arc<dyn ContentSource>,
}

impl Content {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// Load every category and every question.
    ///
    /// Questions are loaded unfiltered: the session needs all of them for
    /// the journal and applies the active filters itself.
    pub async fn load_catalog(&self) -> Result<Catalog, ContentError> {
        let categories = self.source.load_categories().await?;
        let questions = self.source.load_questions(None).await?;

        tracing::info!(
            categories = categories.len(),
            questions = questions.len(),
            "Catalog loaded"
        );

        Ok(Catalog::new(categories, questions))
    }
}
