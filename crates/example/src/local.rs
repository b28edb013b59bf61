//! Local-storage repository implementation.

use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};

use skeletor_core::ExampleId;
use skeletor_store::{KeyValueStore, load_json, save_json};

use crate::{CreateExample, ExampleItem, ExampleRepository, ListParams, RepositoryError, UpdateExample};

/// Fixed namespaced key holding the serialized collection.
pub const EXAMPLES_KEY: &str = "skeletor-example-repo";

/// Default simulated network latency per operation.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(150);

/// Repository backed by durable local storage, simulating a backend.
///
/// The whole collection is serialized as one unit under a fixed key. Every
/// operation reads that unit fresh, so a single caller observes its own
/// writes; concurrent writers are not isolated (last save wins for the whole
/// collection). A missing or corrupt stored value degrades to the fixed seed
/// collection, never an error.
pub struct LocalExampleRepository {
    store: Arc<dyn KeyValueStore>,
    latency: Duration,
}

impl LocalExampleRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            latency: DEFAULT_LATENCY,
        }
    }

    /// Override the simulated latency (tests use zero).
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn load_collection(&self) -> Vec<ExampleItem> {
        load_json(self.store.as_ref(), EXAMPLES_KEY).unwrap_or_else(seed_collection)
    }

    fn persist(&self, items: &[ExampleItem]) -> Result<(), RepositoryError> {
        save_json(self.store.as_ref(), EXAMPLES_KEY, &items)?;
        Ok(())
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

/// The seed collection used when nothing (valid) is stored yet.
pub fn seed_collection() -> Vec<ExampleItem> {
    vec![
        ExampleItem {
            id: ExampleId::from_raw("1"),
            title: "First example".to_string(),
            description: "Description for the first example item.".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        },
        ExampleItem {
            id: ExampleId::from_raw("2"),
            title: "Second example".to_string(),
            description: "Description for the second example item.".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
        },
    ]
}

#[async_trait::async_trait]
impl ExampleRepository for LocalExampleRepository {
    async fn list(&self, params: ListParams) -> Result<Vec<ExampleItem>, RepositoryError> {
        let items = self.load_collection();
        self.simulate_latency().await;

        let needle = match params.search.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => s.to_lowercase(),
            _ => return Ok(items),
        };
        Ok(items.into_iter().filter(|it| it.matches(&needle)).collect())
    }

    async fn get(&self, id: &ExampleId) -> Result<Option<ExampleItem>, RepositoryError> {
        let items = self.load_collection();
        self.simulate_latency().await;
        Ok(items.into_iter().find(|it| &it.id == id))
    }

    async fn create(&self, payload: CreateExample) -> Result<ExampleItem, RepositoryError> {
        let mut items = self.load_collection();
        self.simulate_latency().await;

        let item = ExampleItem {
            id: ExampleId::new(),
            title: payload.title,
            description: payload.description,
            created_at: Utc::now(),
        };
        items.push(item.clone());
        self.persist(&items)?;
        tracing::debug!(id = %item.id, "created example record");
        Ok(item)
    }

    async fn update(
        &self,
        id: &ExampleId,
        payload: UpdateExample,
    ) -> Result<Option<ExampleItem>, RepositoryError> {
        let mut items = self.load_collection();
        self.simulate_latency().await;

        let Some(existing) = items.iter_mut().find(|it| &it.id == id) else {
            return Ok(None);
        };
        if let Some(title) = payload.title {
            existing.title = title;
        }
        if let Some(description) = payload.description {
            existing.description = description;
        }
        let merged = existing.clone();
        self.persist(&items)?;
        tracing::debug!(id = %merged.id, "updated example record");
        Ok(Some(merged))
    }
}
