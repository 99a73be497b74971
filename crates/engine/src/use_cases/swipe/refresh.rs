//! Catalog refresh use case.

use std::sync::Arc;

use deeper_domain::ProgressEvent;

use super::SwipeSession;
use crate::entities::Content;
use crate::infrastructure::ports::ContentError;

/// Load a fresh catalog and hand it to the session.
///
/// A failed load leaves the session on its current catalog (empty before
/// the first successful load).
pub struct RefreshCatalog {
    content: Arc<Content>,
}

impl RefreshCatalog {
    pub fn new(content: Arc<Content>) -> Self {
        Self { content }
    }

    pub async fn execute(
        &self,
        session: &mut SwipeSession,
    ) -> Result<Option<ProgressEvent>, ContentError> {
        let catalog = self.content.load_catalog().await?;
        Ok(session.apply_catalog(catalog))
    }
}
