use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::core::error::AppError;
use crate::features::alerts::dtos::*;
use crate::features::alerts::services::AlertService;
use crate::shared::types::{ApiResponse, Meta, PageQuery};

/// List alerts with pagination and page-level severity counts
#[utoipa::path(
    get,
    path = "/api/alerts",
    tag = "Alerts",
    params(PageQuery),
    responses(
        (status = 200, description = "Alert page with summary counts", body = ApiResponse<AlertListDto>),
        (status = 502, description = "Record backend unavailable")
    )
)]
pub async fn list_alerts(
    State(service): State<Arc<AlertService>>,
    Query(params): Query<PageQuery>,
) -> Result<Json<ApiResponse<AlertListDto>>, AppError> {
    let page = service.load_page(params.limit(), params.skip()).await?;
    let summary = AlertService::summary(&page);
    let total = page.total_count;

    Ok(Json(ApiResponse::success(
        Some(AlertListDto {
            items: page.items,
            has_next: page.has_next,
            next_skip: page.next_skip,
            summary,
        }),
        None,
        Some(Meta { total }),
    )))
}
