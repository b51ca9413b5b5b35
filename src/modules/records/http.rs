use async_trait::async_trait;
use serde_json::Value;

use crate::core::config::RecordsConfig;
use crate::core::error::{AppError, Result};
use crate::modules::records::store::{ListOptions, RecordPage, RecordStore};

/// Error envelope returned by the record backend
#[derive(Debug, serde::Deserialize)]
struct BackendErrorResponse {
    #[serde(default)]
    message: String,
}

/// Client for the hosted record-storage backend.
///
/// Calls are best-effort: failures surface as `AppError` and are logged by the
/// caller's error path; there is no retry policy and no offline queue.
pub struct HttpRecordStore {
    http_client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpRecordStore {
    pub fn new(config: RecordsConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/v1/collections/{}/items", self.base_url, collection)
    }

    fn item_url(&self, collection: &str, id: &str) -> String {
        format!(
            "{}/v1/collections/{}/items/{}",
            self.base_url,
            collection,
            urlencoding::encode(id)
        )
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    async fn error_for(&self, response: reqwest::Response, context: &str) -> AppError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<BackendErrorResponse>(&body)
            .map(|e| e.message)
            .unwrap_or_default();

        tracing::error!(
            "Record backend error ({}): HTTP {} - {}",
            context,
            status,
            if message.is_empty() { &body } else { &message }
        );
        AppError::ExternalServiceError(format!("Record backend error: HTTP {}", status))
    }
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    async fn get_all(&self, collection: &str, opts: ListOptions) -> Result<RecordPage> {
        let mut url = format!(
            "{}?limit={}&skip={}",
            self.collection_url(collection),
            opts.limit,
            opts.skip
        );
        if let Some(filter) = &opts.filter {
            url.push_str("&filter=");
            url.push_str(&urlencoding::encode(&filter.to_string()));
        }

        tracing::debug!("Fetching page: {}", url);

        let response = self
            .authorize(self.http_client.get(&url))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch {} page: {}", collection, e);
                AppError::ExternalServiceError(format!("Failed to fetch records: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(self.error_for(response, "get_all").await);
        }

        response.json::<RecordPage>().await.map_err(|e| {
            tracing::error!("Failed to parse {} page: {}", collection, e);
            AppError::ExternalServiceError(format!("Failed to parse record page: {}", e))
        })
    }

    async fn get_by_id(&self, collection: &str, id: &str) -> Result<Value> {
        let url = self.item_url(collection, id);

        let response = self
            .authorize(self.http_client.get(&url))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch {} record {}: {}", collection, id, e);
                AppError::ExternalServiceError(format!("Failed to fetch record: {}", e))
            })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!(
                "Record {} not found in {}",
                id, collection
            )));
        }
        if !response.status().is_success() {
            return Err(self.error_for(response, "get_by_id").await);
        }

        response.json::<Value>().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Failed to parse record {}: {}", id, e))
        })
    }

    async fn create(&self, collection: &str, record: Value) -> Result<Value> {
        let url = self.collection_url(collection);

        let response = self
            .authorize(self.http_client.post(&url))
            .json(&record)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to create {} record: {}", collection, e);
                AppError::ExternalServiceError(format!("Failed to create record: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(self.error_for(response, "create").await);
        }

        response.json::<Value>().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Failed to parse created record: {}", e))
        })
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        let url = self.item_url(collection, id);

        let response = self
            .authorize(self.http_client.delete(&url))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete {} record {}: {}", collection, id, e);
                AppError::ExternalServiceError(format!("Failed to delete record: {}", e))
            })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!(
                "Record {} not found in {}",
                id, collection
            )));
        }
        if !response.status().is_success() {
            return Err(self.error_for(response, "delete").await);
        }

        Ok(())
    }
}
