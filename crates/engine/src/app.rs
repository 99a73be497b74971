//! Application state and composition.

use std::sync::Arc;

use anyhow::Context;
use deeper_domain::ProgressEvent;

use crate::entities::{Content, ProgressStore};
use crate::infrastructure::{
    config::{AppConfig, StorageLocation},
    content::{BundledCatalog, JsonCatalogSource},
    ports::{ContentError, ContentSource, KeyValueStore},
    storage::{JsonFileStore, MemoryStore},
};
use crate::use_cases::{RefreshCatalog, SwipeSession};

/// Main application state.
///
/// Holds the swipe session and the use cases that feed it.
pub struct App {
    pub config: AppConfig,
    pub session: SwipeSession,
    pub use_cases: UseCases,
}

/// Container for use cases that need infrastructure beyond the session.
pub struct UseCases {
    pub refresh_catalog: RefreshCatalog,
}

impl App {
    /// Wire the application from already-built adapters.
    pub fn new(
        config: AppConfig,
        store: Arc<dyn KeyValueStore>,
        content: Arc<dyn ContentSource>,
    ) -> Self {
        let progress = ProgressStore::load(store, config.progress_key.clone());
        let session = SwipeSession::new(progress, config.queue_policy, config.gesture);
        let content = Arc::new(Content::new(content));

        Self {
            session,
            use_cases: UseCases {
                refresh_catalog: RefreshCatalog::new(content),
            },
            config,
        }
    }

    /// Build the adapters named by `config` and wire the application.
    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let store: Arc<dyn KeyValueStore> = match &config.storage {
            StorageLocation::File(path) => {
                tracing::info!(path = %path.display(), "Using file progress storage");
                Arc::new(JsonFileStore::open(path))
            }
            StorageLocation::Memory => {
                tracing::info!("Using in-memory progress storage; progress is lost on exit");
                Arc::new(MemoryStore::new())
            }
        };

        let content: Arc<dyn ContentSource> = match &config.catalog_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Using catalog file");
                Arc::new(JsonCatalogSource::new(path))
            }
            None => Arc::new(BundledCatalog::new().context("Failed to parse bundled catalog")?),
        };

        Ok(Self::new(config, store, content))
    }

    /// Load the catalog into the session.
    pub async fn refresh_catalog(&mut self) -> Result<Option<ProgressEvent>, ContentError> {
        self.use_cases
            .refresh_catalog
            .execute(&mut self.session)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deeper_domain::{QuestionId, SwipeDirection};

    fn file_config(dir: &tempfile::TempDir) -> AppConfig {
        AppConfig {
            storage: StorageLocation::File(dir.path().join("storage.json")),
            ..AppConfig::default()
        }
    }

    #[tokio::test]
    async fn bundled_catalog_starts_with_every_category_selected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = App::from_config(file_config(&dir)).expect("app");

        app.refresh_catalog().await.expect("catalog");

        let categories = app.session.catalog().categories().len();
        assert_eq!(categories, 9);
        assert_eq!(app.session.progress().current_filters().len(), categories);
        assert!(!app.session.queue().is_empty());
    }

    #[tokio::test]
    async fn progress_survives_restart() {
        let dir = tempfile::tempdir().expect("tempdir");

        let first_head = {
            let mut app = App::from_config(file_config(&dir)).expect("app");
            app.refresh_catalog().await.expect("catalog");
            let head = app.session.queue().head().map(|q| q.id).expect("head");
            app.session.swipe_head(SwipeDirection::Left);
            head
        };

        let mut app = App::from_config(file_config(&dir)).expect("app");
        app.refresh_catalog().await.expect("catalog");

        assert!(app.session.progress().is_saved(first_head));
        assert_ne!(app.session.queue().head().map(|q| q.id), Some(first_head));
        assert_eq!(app.session.journal().saved_count(), 1);
        assert!(app.session.move_to_top(first_head).is_some());
        assert_eq!(app.session.queue().head().map(|q| q.id), Some(QuestionId::new(1)));
    }

    #[tokio::test]
    async fn missing_catalog_file_leaves_an_empty_deck() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = AppConfig {
            storage: StorageLocation::Memory,
            catalog_path: Some(dir.path().join("missing.json")),
            ..AppConfig::default()
        };
        let mut app = App::from_config(config).expect("app");

        assert!(app.refresh_catalog().await.is_err());
        assert!(app.session.queue().is_empty());
    }
}
