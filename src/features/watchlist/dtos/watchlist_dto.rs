use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::asteroids::models::Asteroid;
use crate::features::watchlist::models::WatchlistEntry;

/// Watch state for one `(user, asteroid)` pair
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WatchStateDto {
    pub watched: bool,
    /// True while a toggle request for this pair is outstanding
    pub updating: bool,
}

/// Body for adding an asteroid to the watchlist
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct WatchRequest {
    /// Optional free-text note stored on the entry
    #[validate(length(max = 500, message = "Notes must be at most 500 characters"))]
    pub notes: Option<String>,
}

/// Per-risk counts over the user's entries (exact-match labels)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WatchlistStatsDto {
    pub total: i64,
    pub high: i64,
    pub medium: i64,
    pub low: i64,
}

/// The dedicated watchlist view: the user's entries plus the full asteroid
/// records they reference
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WatchlistDto {
    pub entries: Vec<WatchlistEntry>,
    pub asteroids: Vec<Asteroid>,
    pub stats: WatchlistStatsDto,
}
