use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::core::error::{AppError, Result};
use crate::modules::records::store::{ListOptions, RecordPage, RecordStore};

/// In-process record store with the same paging contract as the hosted
/// backend. Used by tests; records are kept per collection in insertion
/// order (the backend's "default, stable" order).
///
/// Filter expressions are backend query semantics and out of scope here, so
/// `ListOptions::filter` is ignored.
#[derive(Default)]
pub struct MemoryRecordStore {
    collections: RwLock<HashMap<String, Vec<Value>>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record, bypassing the failure switches.
    pub async fn seed(&self, collection: &str, record: Value) {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(record);
    }

    /// Make every read call fail (network-failure injection for tests).
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every create/delete call fail.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub async fn count(&self, collection: &str) -> usize {
        let collections = self.collections.read().await;
        collections.get(collection).map(Vec::len).unwrap_or(0)
    }

    fn check_read(&self) -> Result<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(AppError::ExternalServiceError(
                "Record backend unavailable".to_string(),
            ));
        }
        Ok(())
    }

    fn check_write(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::ExternalServiceError(
                "Record backend unavailable".to_string(),
            ));
        }
        Ok(())
    }

    fn record_id(record: &Value) -> Option<&str> {
        record.get("_id").and_then(Value::as_str)
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn get_all(&self, collection: &str, opts: ListOptions) -> Result<RecordPage> {
        self.check_read()?;

        let collections = self.collections.read().await;
        let records = collections.get(collection).cloned().unwrap_or_default();

        let total_count = records.len() as i64;
        let skip = opts.skip.max(0) as usize;
        let limit = opts.limit.max(0) as usize;

        let items: Vec<Value> = records.into_iter().skip(skip).take(limit).collect();
        let next_skip = (skip + items.len()) as i64;

        Ok(RecordPage {
            items,
            has_next: next_skip < total_count,
            next_skip,
            total_count,
        })
    }

    async fn get_by_id(&self, collection: &str, id: &str) -> Result<Value> {
        self.check_read()?;

        let collections = self.collections.read().await;
        collections
            .get(collection)
            .and_then(|records| {
                records
                    .iter()
                    .find(|r| Self::record_id(r) == Some(id))
                    .cloned()
            })
            .ok_or_else(|| AppError::NotFound(format!("Record {} not found in {}", id, collection)))
    }

    async fn create(&self, collection: &str, record: Value) -> Result<Value> {
        self.check_write()?;

        if Self::record_id(&record).is_none() {
            return Err(AppError::BadRequest(
                "Record must carry a pre-generated _id".to_string(),
            ));
        }

        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        self.check_write()?;

        let mut collections = self.collections.write().await;
        let records = collections
            .get_mut(collection)
            .ok_or_else(|| AppError::NotFound(format!("Collection {} is empty", collection)))?;

        let before = records.len();
        records.retain(|r| Self::record_id(r) != Some(id));
        if records.len() == before {
            return Err(AppError::NotFound(format!(
                "Record {} not found in {}",
                id, collection
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_paging_reports_has_next_and_next_skip() {
        let store = MemoryRecordStore::new();
        for i in 0..5 {
            store.seed("asteroids", json!({ "_id": i.to_string() })).await;
        }

        let page = store
            .get_all("asteroids", ListOptions::page(2, 0))
            .await
            .unwrap();
        assert_eq!(page.items.len(), 2);
        assert!(page.has_next);
        assert_eq!(page.next_skip, 2);
        assert_eq!(page.total_count, 5);

        let last = store
            .get_all("asteroids", ListOptions::page(2, 4))
            .await
            .unwrap();
        assert_eq!(last.items.len(), 1);
        assert!(!last.has_next);
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let store = MemoryRecordStore::new();
        let err = store.get_by_id("asteroids", "missing").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_write_failure_injection() {
        let store = MemoryRecordStore::new();
        store.set_fail_writes(true);
        let err = store
            .create("watchlist", json!({ "_id": "w1" }))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ExternalServiceError(_)));
        assert_eq!(store.count("watchlist").await, 0);
    }
}
