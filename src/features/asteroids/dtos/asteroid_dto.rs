use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::asteroids::models::Asteroid;
use crate::shared::constants::{DEFAULT_PAGE_SIZE, RISK_FILTER_ALL};

fn default_limit() -> i64 {
    DEFAULT_PAGE_SIZE
}

fn default_risk() -> String {
    RISK_FILTER_ALL.to_string()
}

/// Query parameters for the dashboard asteroid listing
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct AsteroidListQuery {
    /// Number of records to fetch (default: 50, max: 100)
    #[serde(default = "default_limit")]
    #[param(minimum = 1, maximum = 100)]
    pub limit: i64,

    /// Number of records to skip (default: 0)
    #[serde(default)]
    #[param(minimum = 0)]
    pub skip: i64,

    /// Risk category: "all", or an exact risk label ("Low"/"Medium"/"High",
    /// case-sensitive)
    #[serde(default = "default_risk")]
    pub risk: String,

    /// Free-text search over name and designation (case-insensitive substring)
    #[serde(default)]
    pub q: String,
}

/// Header stats for the dashboard: total from the backend's count, per-risk
/// counts over the fetched page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardStatsDto {
    pub total: i64,
    pub high: i64,
    pub medium: i64,
    pub low: i64,
}

/// One page of the dashboard listing, after local filtering
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AsteroidListDto {
    pub items: Vec<Asteroid>,
    pub has_next: bool,
    /// Skip value for the next "load more" fetch
    pub next_skip: i64,
    pub stats: DashboardStatsDto,
}
