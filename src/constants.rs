//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

// =============================================================================
// PAGINATION DEFAULTS
// =============================================================================

/// Default comments per page
pub const DEFAULT_COMMENTS_PER_PAGE: u32 = 20;

/// Maximum items per page on any paginated endpoint
pub const MAX_PER_PAGE: u32 = 100;

// =============================================================================
// INPUT LIMITS
// =============================================================================

/// Maximum comment length in characters
pub const MAX_COMMENT_LENGTH: u64 = 2000;

/// Maximum league/team name length
pub const MAX_NAME_LENGTH: u64 = 120;

/// Maximum team short code length
pub const MAX_SHORT_CODE_LENGTH: u64 = 8;

/// Maximum venue length
pub const MAX_VENUE_LENGTH: u64 = 200;

/// Maximum goals accepted in a score prediction (sanity bound)
pub const MAX_PREDICTED_GOALS: i32 = 99;

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const USER: &str = "user";
    pub const ADMIN: &str = "admin";
    /// Pre-seeded demo accounts
    pub const SEED: &str = "seed";

    pub const ALL: [&str; 3] = [USER, ADMIN, SEED];
}

// =============================================================================
// MATCH ENUMERATIONS
// =============================================================================

/// Match status values
pub mod match_status {
    pub const SCHEDULED: &str = "scheduled";
    pub const LIVE: &str = "live";
    pub const FINISHED: &str = "finished";
    pub const POSTPONED: &str = "postponed";

    pub const ALL: [&str; 4] = [SCHEDULED, LIVE, FINISHED, POSTPONED];
}

/// Match type values
pub mod match_types {
    pub const NORMAL: &str = "Normal";
    pub const FINAL: &str = "Final";
    pub const SEMI_FINAL: &str = "Semi-Final";
    pub const QUARTER_FINAL: &str = "Quarter-Final";

    pub const ALL: [&str; 4] = [NORMAL, FINAL, SEMI_FINAL, QUARTER_FINAL];
}

/// Team type values
pub mod team_types {
    pub const CLUB: &str = "club";
    pub const COUNTRY: &str = "country";

    pub const ALL: [&str; 2] = [CLUB, COUNTRY];
}

// =============================================================================
// REACTIONS
// =============================================================================

/// Comment reaction types
pub mod reactions {
    pub const LIKE: &str = "like";
    pub const DISLIKE: &str = "dislike";

    pub const ALL: [&str; 2] = [LIKE, DISLIKE];
}
