//! Demo catalog compiled into the binary.
//!
//! Nine default categories with a handful of sample questions each, used
//! when no catalog file is configured.

use std::collections::BTreeSet;

use async_trait::async_trait;
use deeper_domain::{sort_categories, Category, CategoryId, Question};
use deeper_shared::CatalogDto;

use crate::infrastructure::ports::{ContentError, ContentSource};

const CATALOG_JSON: &str = include_str!("../../../assets/catalog.json");

pub struct BundledCatalog {
    categories: Vec<Category>,
    questions: Vec<Question>,
}

impl BundledCatalog {
    pub fn new() -> Result<Self, ContentError> {
        let dto: CatalogDto = serde_json::from_str(CATALOG_JSON).map_err(ContentError::parse)?;
        let records = dto.into_records();
        let mut categories = records.categories;
        sort_categories(&mut categories);

        Ok(Self {
            categories,
            questions: records.questions,
        })
    }
}

#[async_trait]
impl ContentSource for BundledCatalog {
    async fn load_categories(&self) -> Result<Vec<Category>, ContentError> {
        Ok(self.categories.clone())
    }

    async fn load_questions(
        &self,
        category_ids: Option<BTreeSet<CategoryId>>,
    ) -> Result<Vec<Question>, ContentError> {
        Ok(super::narrow(self.questions.clone(), category_ids.as_ref()))
    }
}
