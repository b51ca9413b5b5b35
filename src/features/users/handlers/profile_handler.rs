use axum::Json;

use crate::core::error::Result;
use crate::features::auth::guards::CurrentMember;
use crate::features::users::dtos::ProfileDto;
use crate::shared::types::ApiResponse;

#[utoipa::path(
    get,
    path = "/api/users/me",
    responses(
        (status = 200, description = "Profile retrieved successfully", body = ApiResponse<ProfileDto>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "users",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_profile(
    CurrentMember(member): CurrentMember,
) -> Result<Json<ApiResponse<ProfileDto>>> {
    Ok(Json(ApiResponse::success(Some(member.into()), None, None)))
}
