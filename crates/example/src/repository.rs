//! Repository contract for the example collection.

use serde_json::Value as JsonValue;
use thiserror::Error;

use skeletor_core::ExampleId;
use skeletor_store::StoreError;

use crate::{CreateExample, ExampleItem, UpdateExample};

/// Query parameters for [`ExampleRepository::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Case-insensitive substring filter over title and description.
    /// Absent or blank lists the whole collection.
    pub search: Option<String>,
}

impl ListParams {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
        }
    }
}

/// Failure modes a repository implementation can surface.
///
/// A miss on `get`/`update` is **not** an error: it is `Ok(None)` and callers
/// must branch explicitly. Storage corruption never reaches this type either;
/// the local implementation degrades to its seed collection.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Durable storage write failure (local implementation).
    #[error(transparent)]
    Storage(#[from] StoreError),

    /// The backend rejected the request (HTTP implementation).
    #[error("api error {status}: {message}")]
    Api {
        status: u16,
        message: String,
        details: Option<JsonValue>,
    },

    /// The backend was unreachable (HTTP implementation).
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Asynchronous CRUD access to the example collection.
///
/// Operations are independent and unordered relative to each other; each call
/// observes the persisted collection fresh at the start of its own execution.
/// There is no delete operation in this feature.
#[async_trait::async_trait]
pub trait ExampleRepository: Send + Sync {
    /// List records, optionally filtered. Returns a fresh sequence in the
    /// collection's insertion order.
    async fn list(&self, params: ListParams) -> Result<Vec<ExampleItem>, RepositoryError>;

    /// Fetch one record; `Ok(None)` when no record matches.
    async fn get(&self, id: &ExampleId) -> Result<Option<ExampleItem>, RepositoryError>;

    /// Create a record with a server-assigned id and creation timestamp.
    async fn create(&self, payload: CreateExample) -> Result<ExampleItem, RepositoryError>;

    /// Merge `payload` over an existing record. `Ok(None)` (and no mutation)
    /// when `id` is unknown.
    async fn update(
        &self,
        id: &ExampleId,
        payload: UpdateExample,
    ) -> Result<Option<ExampleItem>, RepositoryError>;
}
