use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::features::watchlist::handlers::watchlist_handler;
use crate::features::watchlist::services::{WatchReconciler, WatchlistViewService};

pub fn watchlist_routes(
    view_service: Arc<WatchlistViewService>,
    reconciler: Arc<WatchReconciler>,
) -> Router {
    let view_routes = Router::new()
        .route("/api/watchlist", get(watchlist_handler::get_watchlist))
        .route(
            "/api/watchlist/entries/{entry_id}",
            delete(watchlist_handler::remove_entry),
        )
        .with_state(view_service);

    let watch_routes = Router::new()
        .route(
            "/api/watchlist/{asteroid_id}/status",
            get(watchlist_handler::watch_status),
        )
        .route(
            "/api/watchlist/{asteroid_id}/watch",
            post(watchlist_handler::watch_asteroid)
                .delete(watchlist_handler::unwatch_asteroid),
        )
        .with_state(reconciler);

    view_routes.merge(watch_routes)
}
