use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::asteroids::handlers;
use crate::features::asteroids::services::AsteroidService;

/// Create public dashboard asteroid routes
pub fn routes(asteroid_service: Arc<AsteroidService>) -> Router {
    Router::new()
        .route("/api/dashboard/asteroids", get(handlers::list_asteroids))
        .route("/api/dashboard/asteroids/{id}", get(handlers::get_asteroid))
        .with_state(asteroid_service)
}
