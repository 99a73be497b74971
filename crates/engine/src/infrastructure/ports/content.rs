//! Catalog content source (categories and questions).

use std::collections::BTreeSet;

use async_trait::async_trait;
use deeper_domain::{Category, CategoryId, Question};

use super::ContentError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// All categories, by `order` ascending then `id`.
    async fn load_categories(&self) -> Result<Vec<Category>, ContentError>;

    /// Questions in catalog order, optionally narrowed to the given categories.
    ///
    /// Narrowing is an optimization only; callers still apply their own
    /// filtering to whatever comes back.
    async fn load_questions(
        &self,
        category_ids: Option<BTreeSet<CategoryId>>,
    ) -> Result<Vec<Question>, ContentError>;
}
