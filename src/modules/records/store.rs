use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::{AppError, Result};
use crate::shared::constants::DEFAULT_PAGE_SIZE;
use crate::shared::types::Page;

/// Options for a `get_all` call against the storage backend.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Backend filter expression (opaque to this service)
    pub filter: Option<Value>,
    pub limit: i64,
    pub skip: i64,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            filter: None,
            limit: DEFAULT_PAGE_SIZE,
            skip: 0,
        }
    }
}

impl ListOptions {
    pub fn page(limit: i64, skip: i64) -> Self {
        Self {
            filter: None,
            limit,
            skip,
        }
    }
}

/// One page of raw records as the backend reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPage {
    pub items: Vec<Value>,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub next_skip: i64,
    #[serde(default)]
    pub total_count: i64,
}

impl RecordPage {
    /// Deserialize the page items into their record type.
    pub fn typed<T: DeserializeOwned>(self) -> Result<Page<T>> {
        let mut items = Vec::with_capacity(self.items.len());
        for item in self.items {
            items.push(serde_json::from_value(item).map_err(|e| {
                AppError::ExternalServiceError(format!("Malformed record in page: {}", e))
            })?);
        }
        Ok(Page {
            items,
            has_next: self.has_next,
            next_skip: self.next_skip,
            total_count: self.total_count,
        })
    }
}

/// Generic create/read/update/delete accessor for the hosted record-storage
/// backend. The backend owns all three collections; this service only holds
/// transient in-memory copies and is never a source of truth.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn get_all(&self, collection: &str, opts: ListOptions) -> Result<RecordPage>;

    /// Fails with `AppError::NotFound` when the record is absent.
    async fn get_by_id(&self, collection: &str, id: &str) -> Result<Value>;

    /// The record must already carry its pre-generated unique `_id`.
    async fn create(&self, collection: &str, record: Value) -> Result<Value>;

    async fn delete(&self, collection: &str, id: &str) -> Result<()>;
}

/// Typed `get_all`: fetch one page and deserialize its items.
pub async fn get_all_as<T: DeserializeOwned>(
    store: &dyn RecordStore,
    collection: &str,
    opts: ListOptions,
) -> Result<Page<T>> {
    store.get_all(collection, opts).await?.typed()
}

/// Typed `get_by_id`.
pub async fn get_by_id_as<T: DeserializeOwned>(
    store: &dyn RecordStore,
    collection: &str,
    id: &str,
) -> Result<T> {
    let value = store.get_by_id(collection, id).await?;
    serde_json::from_value(value)
        .map_err(|e| AppError::ExternalServiceError(format!("Malformed record {}: {}", id, e)))
}

/// Typed `create`.
pub async fn create_from<T: Serialize>(
    store: &dyn RecordStore,
    collection: &str,
    record: &T,
) -> Result<Value> {
    let value = serde_json::to_value(record)
        .map_err(|e| AppError::Internal(format!("Failed to serialize record: {}", e)))?;
    store.create(collection, value).await
}
