use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::asteroids::models::Asteroid;

/// Watchlist record from the `watchlist` collection: a user-scoped
/// subscription linking a user identifier to an asteroid identifier.
///
/// `userId` is opaque (a login email or internal member id). Asteroid name
/// and risk level are denormalized copies taken at add time.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdDate", skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(rename = "_updatedDate", skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asteroid_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asteroid_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WatchlistEntry {
    /// Build a new entry for a user watching an asteroid. The id is
    /// pre-generated here, as the record backend requires.
    pub fn new_for(user_key: &str, asteroid: &Asteroid, notes: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            created_date: None,
            updated_date: None,
            user_id: Some(user_key.to_string()),
            asteroid_id: Some(asteroid.id.clone()),
            asteroid_name: asteroid.name.clone(),
            added_date: Some(Utc::now()),
            risk_level: asteroid.risk_level.clone(),
            notes,
        }
    }

    /// Membership test for one `(userId, asteroidId)` pair.
    pub fn matches(&self, user_key: &str, asteroid_id: &str) -> bool {
        self.user_id.as_deref() == Some(user_key)
            && self.asteroid_id.as_deref() == Some(asteroid_id)
    }

    pub fn belongs_to(&self, user_key: &str) -> bool {
        self.user_id.as_deref() == Some(user_key)
    }
}
