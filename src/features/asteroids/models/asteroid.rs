use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Near-Earth asteroid record from the `asteroids` collection.
///
/// Asteroid records are created and updated externally; this service only
/// reads them. Risk level and hazard flag are precomputed fields, never
/// derived here. Everything except the id is optional on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Asteroid {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdDate", skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(rename = "_updatedDate", skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_magnitude: Option<f64>,
    /// Estimated diameter lower bound, meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_diameter_min: Option<f64>,
    /// Estimated diameter upper bound, meters. When the lower bound is
    /// present this is assumed present and >= it (not enforced).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_diameter_max: Option<f64>,
    /// km/h
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_velocity: Option<f64>,
    /// km
    #[serde(skip_serializing_if = "Option::is_none")]
    pub miss_distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_approach_date: Option<DateTime<Utc>>,
    /// Time-of-day of closest approach, as the backend stores it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_approach_time: Option<String>,
    /// Precomputed "Low" | "Medium" | "High", optionally absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_potentially_hazardous: Option<bool>,
}

impl Asteroid {
    /// Exact (case-sensitive) risk-level comparison, matching how the
    /// dashboard filters; alert severities elsewhere compare case-insensitively.
    pub fn risk_is(&self, level: &str) -> bool {
        self.risk_level.as_deref() == Some(level)
    }
}
