use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Alert record from the `alerts` collection.
///
/// Produced by an external alerting process; read-only here. Severity and
/// alert type are free text and are compared case-insensitively (unlike the
/// asteroid risk-level filter).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdDate", skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(rename = "_updatedDate", skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Free text; expected labels are critical/high/medium/low
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_timestamp: Option<DateTime<Utc>>,
    /// Optional outbound link to the asteroid's detail page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asteroid_details_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free text, e.g. "Close Approach" or "Risk Update"; drives icon choice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_type: Option<String>,
}

impl Alert {
    pub fn severity_is(&self, label: &str) -> bool {
        matches!(&self.severity, Some(s) if s.eq_ignore_ascii_case(label))
    }

    pub fn is_close_approach(&self) -> bool {
        matches!(&self.alert_type, Some(t) if t.eq_ignore_ascii_case("close approach"))
    }
}
