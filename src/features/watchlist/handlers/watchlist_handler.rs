use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::auth::guards::CurrentMember;
use crate::features::watchlist::dtos::{WatchRequest, WatchStateDto, WatchlistDto};
use crate::features::watchlist::services::{WatchReconciler, WatchlistViewService};
use crate::shared::types::{ApiResponse, Meta};

/// Get the signed-in member's watchlist with joined asteroids and stats
#[utoipa::path(
    get,
    path = "/api/watchlist",
    tag = "Watchlist",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Watchlist retrieved successfully"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_watchlist(
    State(service): State<Arc<WatchlistViewService>>,
    CurrentMember(member): CurrentMember,
) -> Result<Json<ApiResponse<WatchlistDto>>> {
    let view = service.load(member.user_key()).await?;
    let stats = view.stats();
    let total = stats.total;

    Ok(Json(ApiResponse::success(
        Some(WatchlistDto {
            entries: view.entries,
            asteroids: view.asteroids,
            stats,
        }),
        None,
        Some(Meta { total }),
    )))
}

/// Remove a watchlist entry by its entry id
#[utoipa::path(
    delete,
    path = "/api/watchlist/entries/{entry_id}",
    tag = "Watchlist",
    security(("bearer_auth" = [])),
    params(("entry_id" = String, Path, description = "Watchlist entry ID")),
    responses(
        (status = 200, description = "Entry removed"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn remove_entry(
    State(service): State<Arc<WatchlistViewService>>,
    CurrentMember(member): CurrentMember,
    Path(entry_id): Path<String>,
) -> Result<Json<ApiResponse<WatchlistDto>>> {
    let view = service.load(member.user_key()).await?;
    let next = service.remove(member.user_key(), &view, &entry_id).await?;
    let stats = next.stats();
    let total = stats.total;

    Ok(Json(ApiResponse::success(
        Some(WatchlistDto {
            entries: next.entries,
            asteroids: next.asteroids,
            stats,
        }),
        Some("Entry removed".to_string()),
        Some(Meta { total }),
    )))
}

/// Check whether the signed-in member watches an asteroid
#[utoipa::path(
    get,
    path = "/api/watchlist/{asteroid_id}/status",
    tag = "Watchlist",
    security(("bearer_auth" = [])),
    params(("asteroid_id" = String, Path, description = "Asteroid ID")),
    responses(
        (status = 200, description = "Watch status retrieved"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn watch_status(
    State(reconciler): State<Arc<WatchReconciler>>,
    CurrentMember(member): CurrentMember,
    Path(asteroid_id): Path<String>,
) -> Result<Json<ApiResponse<WatchStateDto>>> {
    let state = reconciler.status(member.user_key(), &asteroid_id).await?;
    Ok(Json(ApiResponse::success(Some(state), None, None)))
}

/// Add an asteroid to the signed-in member's watchlist
#[utoipa::path(
    post,
    path = "/api/watchlist/{asteroid_id}/watch",
    tag = "Watchlist",
    security(("bearer_auth" = [])),
    params(("asteroid_id" = String, Path, description = "Asteroid ID")),
    request_body = WatchRequest,
    responses(
        (status = 200, description = "Asteroid added to watchlist"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Asteroid not found")
    )
)]
pub async fn watch_asteroid(
    State(reconciler): State<Arc<WatchReconciler>>,
    CurrentMember(member): CurrentMember,
    Path(asteroid_id): Path<String>,
    Json(payload): Json<WatchRequest>,
) -> Result<Json<ApiResponse<WatchStateDto>>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let state = reconciler.watch(&member, &asteroid_id, payload.notes).await?;
    Ok(Json(ApiResponse::success(
        Some(state),
        Some("Asteroid added to watchlist".to_string()),
        None,
    )))
}

/// Remove an asteroid from the signed-in member's watchlist
#[utoipa::path(
    delete,
    path = "/api/watchlist/{asteroid_id}/watch",
    tag = "Watchlist",
    security(("bearer_auth" = [])),
    params(("asteroid_id" = String, Path, description = "Asteroid ID")),
    responses(
        (status = 200, description = "Asteroid removed from watchlist"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn unwatch_asteroid(
    State(reconciler): State<Arc<WatchReconciler>>,
    CurrentMember(member): CurrentMember,
    Path(asteroid_id): Path<String>,
) -> Result<Json<ApiResponse<WatchStateDto>>> {
    let state = reconciler.unwatch(&member, &asteroid_id).await?;
    Ok(Json(ApiResponse::success(
        Some(state),
        Some("Asteroid removed from watchlist".to_string()),
        None,
    )))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum_test::TestServer;

    use crate::features::watchlist::routes::watchlist_routes;
    use crate::features::watchlist::services::{WatchReconciler, WatchlistViewService};
    use crate::modules::records::MemoryRecordStore;
    use crate::shared::constants::RISK_HIGH;
    use crate::shared::test_helpers::{seed_asteroid, test_asteroid, with_member_auth};

    fn test_app(store: Arc<MemoryRecordStore>) -> TestServer {
        let view_service = Arc::new(WatchlistViewService::new(store.clone()));
        let reconciler = Arc::new(WatchReconciler::new(store));
        let router = with_member_auth(watchlist_routes(view_service, reconciler));
        TestServer::new(router).unwrap()
    }

    #[tokio::test]
    async fn test_watch_flow_over_http() {
        let store = Arc::new(MemoryRecordStore::new());
        seed_asteroid(&store, test_asteroid("a1", "Apophis", Some(RISK_HIGH))).await;
        let server = test_app(store);

        let response = server
            .post("/api/watchlist/a1/watch")
            .json(&serde_json::json!({ "notes": "flyby 2029" }))
            .await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["watched"], true);

        let response = server.get("/api/watchlist").await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["data"]["stats"]["total"], 1);
        assert_eq!(body["data"]["asteroids"][0]["name"], "Apophis");
    }

    #[tokio::test]
    async fn test_watch_unknown_asteroid_is_404() {
        let server = test_app(Arc::new(MemoryRecordStore::new()));

        let response = server
            .post("/api/watchlist/nope/watch")
            .json(&serde_json::json!({}))
            .await;
        response.assert_status_not_found();
    }
}
