use std::sync::Arc;

use crate::core::error::Result;
use crate::features::alerts::dtos::AlertSummaryDto;
use crate::features::alerts::models::Alert;
use crate::modules::records::store::{self, ListOptions, RecordStore};
use crate::shared::constants::COLLECTION_ALERTS;
use crate::shared::types::Page;

/// Read-side service for the alerts feed.
pub struct AlertService {
    store: Arc<dyn RecordStore>,
}

impl AlertService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Fetch one page of alerts in the backend's default order.
    pub async fn load_page(&self, limit: i64, skip: i64) -> Result<Page<Alert>> {
        store::get_all_as(
            self.store.as_ref(),
            COLLECTION_ALERTS,
            ListOptions::page(limit, skip),
        )
        .await
    }

    /// Header counts over the fetched page. Severity and alert-type labels
    /// compare case-insensitively.
    pub fn summary(page: &Page<Alert>) -> AlertSummaryDto {
        AlertSummaryDto {
            total: page.total_count,
            critical: page.items.iter().filter(|a| a.severity_is("critical")).count() as i64,
            high: page.items.iter().filter(|a| a.severity_is("high")).count() as i64,
            close_approaches: page.items.iter().filter(|a| a.is_close_approach()).count() as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::records::MemoryRecordStore;
    use serde_json::json;

    async fn seeded_store() -> Arc<MemoryRecordStore> {
        let store = Arc::new(MemoryRecordStore::new());
        store
            .seed(
                COLLECTION_ALERTS,
                json!({
                    "_id": "al1",
                    "title": "99942 Apophis approach window",
                    "severity": "CRITICAL",
                    "alertType": "Close Approach"
                }),
            )
            .await;
        store
            .seed(
                COLLECTION_ALERTS,
                json!({
                    "_id": "al2",
                    "title": "Risk reclassification",
                    "severity": "high",
                    "alertType": "Risk Update"
                }),
            )
            .await;
        store
            .seed(
                COLLECTION_ALERTS,
                json!({
                    "_id": "al3",
                    "title": "Routine pass",
                    "severity": "Low",
                    "alertType": "close approach"
                }),
            )
            .await;
        store
    }

    #[tokio::test]
    async fn test_summary_counts_severity_case_insensitively() {
        let service = AlertService::new(seeded_store().await);
        let page = service.load_page(50, 0).await.unwrap();
        let summary = AlertService::summary(&page);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.critical, 1);
        assert_eq!(summary.high, 1);
        assert_eq!(summary.close_approaches, 2);
    }

    #[tokio::test]
    async fn test_load_page_preserves_backend_order() {
        let service = AlertService::new(seeded_store().await);
        let page = service.load_page(2, 0).await.unwrap();

        assert_eq!(page.items.len(), 2);
        assert!(page.has_next);
        assert_eq!(page.next_skip, 2);
        assert_eq!(page.items[0].id, "al1");
        assert_eq!(page.items[1].id, "al2");
    }
}
