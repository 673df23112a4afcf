//! Match model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Match database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Match {
    pub match_id: i64,
    pub league_id: i64,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub match_date: DateTime<Utc>,
    pub venue: String,
    /// scheduled, live, finished, postponed
    pub status: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub allow_draw: bool,
    /// IANA timezone identifier the match is displayed in (e.g. Europe/London)
    pub match_timezone: String,
    pub big_match: bool,
    pub derby: bool,
    /// Normal, Final, Semi-Final, Quarter-Final
    pub match_type: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Match joined with team and league display fields for list/detail views
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MatchWithDetails {
    pub match_id: i64,
    pub league_id: i64,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub match_date: DateTime<Utc>,
    pub venue: String,
    pub status: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub allow_draw: bool,
    pub match_timezone: String,
    pub big_match: bool,
    pub derby: bool,
    pub match_type: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub home_team_name: String,
    pub home_team_code: String,
    pub home_team_logo: Option<String>,
    pub away_team_name: String,
    pub away_team_code: String,
    pub away_team_logo: Option<String>,
    pub league_name: String,
    pub league_country: String,
}
