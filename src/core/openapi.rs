use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::alerts::{dtos as alerts_dtos, handlers::alert_handler, models as alerts_models};
use crate::features::asteroids::{
    dtos as asteroids_dtos, handlers::asteroid_handler, models as asteroids_models,
};
use crate::features::auth;
use crate::features::users::{dtos as users_dtos, handlers::profile_handler};
use crate::features::watchlist::{
    dtos as watchlist_dtos, handlers::watchlist_handler, models as watchlist_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Asteroids (public)
        asteroid_handler::list_asteroids,
        asteroid_handler::get_asteroid,
        // Alerts (public)
        alert_handler::list_alerts,
        // Watchlist (protected)
        watchlist_handler::get_watchlist,
        watchlist_handler::remove_entry,
        watchlist_handler::watch_status,
        watchlist_handler::watch_asteroid,
        watchlist_handler::unwatch_asteroid,
        // Users (protected)
        profile_handler::get_profile,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth::model::Member,
            auth::model::MemberProfile,
            auth::model::MemberPhoto,
            auth::model::MemberContact,
            // Asteroids
            asteroids_models::Asteroid,
            asteroids_dtos::DashboardStatsDto,
            asteroids_dtos::AsteroidListDto,
            ApiResponse<asteroids_dtos::AsteroidListDto>,
            ApiResponse<asteroids_models::Asteroid>,
            // Alerts
            alerts_models::Alert,
            alerts_dtos::AlertSummaryDto,
            alerts_dtos::AlertListDto,
            ApiResponse<alerts_dtos::AlertListDto>,
            // Watchlist
            watchlist_models::WatchlistEntry,
            watchlist_dtos::WatchRequest,
            watchlist_dtos::WatchStateDto,
            watchlist_dtos::WatchlistStatsDto,
            watchlist_dtos::WatchlistDto,
            ApiResponse<watchlist_dtos::WatchlistDto>,
            ApiResponse<watchlist_dtos::WatchStateDto>,
            // Users
            users_dtos::ProfileDto,
            ApiResponse<users_dtos::ProfileDto>,
        )
    ),
    tags(
        (name = "Dashboard", description = "Near-Earth asteroid catalog (public)"),
        (name = "Alerts", description = "Recent close-approach and risk alerts (public)"),
        (name = "Watchlist", description = "Per-member asteroid watchlist"),
        (name = "users", description = "Member profile"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "NEO Track API",
        version = "0.1.0",
        description = "API documentation for NEO Track",
    )
)]
pub struct ApiDoc;

/// Adds Bearer session-token security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
