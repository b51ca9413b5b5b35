use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::alerts::models::Alert;

/// Counts for the alerts page header, computed over the fetched page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlertSummaryDto {
    pub total: i64,
    /// severity == "critical" (case-insensitive)
    pub critical: i64,
    /// severity == "high" (case-insensitive)
    pub high: i64,
    /// alertType == "Close Approach" (case-insensitive)
    pub close_approaches: i64,
}

/// One page of the alerts feed
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlertListDto {
    pub items: Vec<Alert>,
    pub has_next: bool,
    /// Skip value for the next "load more" fetch
    pub next_skip: i64,
    pub summary: AlertSummaryDto,
}
