use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::alerts::handlers;
use crate::features::alerts::services::AlertService;

/// Create public alert routes
pub fn routes(alert_service: Arc<AlertService>) -> Router {
    Router::new()
        .route("/api/alerts", get(handlers::list_alerts))
        .with_state(alert_service)
}
