//! Catalog read from a JSON document on disk.
//!
//! The file holds `{ "categories": [...], "questions": [...] }` in the content
//! backend's camelCase layout. It is re-read on every load so edits show up
//! on the next catalog refresh.

use std::collections::BTreeSet;
use std::path::PathBuf;

use async_trait::async_trait;
use deeper_domain::{sort_categories, Category, CategoryId, Question};
use deeper_shared::{CatalogDto, CatalogRecords};

use crate::infrastructure::ports::{ContentError, ContentSource};

pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read(&self) -> Result<CatalogRecords, ContentError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ContentError::io("read_catalog_file", e))?;
        let dto: CatalogDto = serde_json::from_str(&raw).map_err(ContentError::parse)?;
        let records = dto.into_records();

        if records.rejected > 0 {
            tracing::warn!(
                path = %self.path.display(),
                rejected = records.rejected,
                "Catalog file contained invalid records"
            );
        }
        Ok(records)
    }
}

#[async_trait]
impl ContentSource for JsonCatalogSource {
    async fn load_categories(&self) -> Result<Vec<Category>, ContentError> {
        let mut categories = self.read().await?.categories;
        sort_categories(&mut categories);
        Ok(categories)
    }

    async fn load_questions(
        &self,
        category_ids: Option<BTreeSet<CategoryId>>,
    ) -> Result<Vec<Question>, ContentError> {
        let questions = self.read().await?.questions;
        Ok(super::narrow(questions, category_ids.as_ref()))
    }
}
