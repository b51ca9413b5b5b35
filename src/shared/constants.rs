/// Default page size for record listings (one backend fetch)
pub const DEFAULT_PAGE_SIZE: i64 = 50;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// COLLECTION IDS
// =============================================================================

/// Asteroid records (read-only from this service)
pub const COLLECTION_ASTEROIDS: &str = "asteroids";

/// Per-user watchlist entries
pub const COLLECTION_WATCHLIST: &str = "watchlist";

/// Alerts produced by the external alerting process (read-only)
pub const COLLECTION_ALERTS: &str = "alerts";

// =============================================================================
// RISK LEVEL LABELS
// =============================================================================

// Risk levels are precomputed text fields on asteroid records. Dashboard
// filtering compares them exactly (case-sensitive), unlike alert severities.
pub const RISK_HIGH: &str = "High";
pub const RISK_MEDIUM: &str = "Medium";
pub const RISK_LOW: &str = "Low";

/// Sentinel risk selection that disables the category predicate
pub const RISK_FILTER_ALL: &str = "all";
