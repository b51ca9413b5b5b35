use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::core::error::AppError;
use crate::features::asteroids::dtos::*;
use crate::features::asteroids::services::{filter_asteroids, AsteroidService};
use crate::shared::constants::MAX_PAGE_SIZE;
use crate::shared::types::{ApiResponse, Meta};

/// List asteroids for the dashboard, locally filtered by risk category and
/// free-text query
#[utoipa::path(
    get,
    path = "/api/dashboard/asteroids",
    tag = "Dashboard",
    params(AsteroidListQuery),
    responses(
        (status = 200, description = "Filtered asteroid page with stats", body = ApiResponse<AsteroidListDto>),
        (status = 502, description = "Record backend unavailable")
    )
)]
pub async fn list_asteroids(
    State(service): State<Arc<AsteroidService>>,
    Query(params): Query<AsteroidListQuery>,
) -> Result<Json<ApiResponse<AsteroidListDto>>, AppError> {
    let limit = params.limit.clamp(1, MAX_PAGE_SIZE);
    let skip = params.skip.max(0);

    let page = service.load_page(limit, skip).await?;
    let stats = AsteroidService::stats(&page);
    let items = filter_asteroids(&page.items, &params.risk, &params.q);
    let total = page.total_count;

    Ok(Json(ApiResponse::success(
        Some(AsteroidListDto {
            items,
            has_next: page.has_next,
            next_skip: page.next_skip,
            stats,
        }),
        None,
        Some(Meta { total }),
    )))
}

/// Get a single asteroid by id
#[utoipa::path(
    get,
    path = "/api/dashboard/asteroids/{id}",
    tag = "Dashboard",
    params(
        ("id" = String, Path, description = "Asteroid record ID")
    ),
    responses(
        (status = 200, description = "Asteroid detail", body = ApiResponse<crate::features::asteroids::models::Asteroid>),
        (status = 404, description = "Asteroid not found"),
        (status = 502, description = "Record backend unavailable")
    )
)]
pub async fn get_asteroid(
    State(service): State<Arc<AsteroidService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<crate::features::asteroids::models::Asteroid>>, AppError> {
    let asteroid = service.get(&id).await?;
    Ok(Json(ApiResponse::success(Some(asteroid), None, None)))
}
