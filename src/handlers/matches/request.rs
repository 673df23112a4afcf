//! Match request DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_VENUE_LENGTH;

/// Create match request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMatchRequest {
    pub league_id: i64,
    pub home_team_id: i64,
    pub away_team_id: i64,

    /// Kick-off in UTC
    pub match_date: DateTime<Utc>,

    #[validate(length(min = 1, max = MAX_VENUE_LENGTH))]
    pub venue: String,

    /// scheduled, live, finished, postponed (default scheduled)
    pub status: Option<String>,

    pub home_score: Option<i32>,
    pub away_score: Option<i32>,

    /// Whether a draw is a possible result (default true)
    pub allow_draw: Option<bool>,

    /// IANA timezone for display (default UTC)
    pub match_timezone: Option<String>,

    pub big_match: Option<bool>,
    pub derby: Option<bool>,

    /// Normal, Final, Semi-Final, Quarter-Final (default Normal)
    pub match_type: Option<String>,

    pub published: Option<bool>,
}

/// Update match request (partial, absent fields untouched)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMatchRequest {
    pub league_id: Option<i64>,
    pub home_team_id: Option<i64>,
    pub away_team_id: Option<i64>,
    pub match_date: Option<DateTime<Utc>>,

    #[validate(length(min = 1, max = MAX_VENUE_LENGTH))]
    pub venue: Option<String>,

    pub status: Option<String>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub allow_draw: Option<bool>,
    pub match_timezone: Option<String>,
    pub big_match: Option<bool>,
    pub derby: Option<bool>,
    pub match_type: Option<String>,
    pub published: Option<bool>,
}

/// List matches query parameters
#[derive(Debug, Deserialize)]
pub struct ListMatchesQuery {
    pub league_id: Option<i64>,
    /// Calendar date of kick-off (YYYY-MM-DD)
    pub date: Option<NaiveDate>,
    pub status: Option<String>,
}

/// Set editorial outcome probabilities request
#[derive(Debug, Deserialize)]
pub struct SetOutcomesRequest {
    pub home_win_prob: f64,
    pub draw_prob: f64,
    pub away_win_prob: f64,
}

/// Manual admin override of the baseline vote counts
#[derive(Debug, Deserialize)]
pub struct OverrideVoteCountsRequest {
    pub home_votes: i64,
    pub draw_votes: i64,
    pub away_votes: i64,
}

/// Score vote on a match
#[derive(Debug, Deserialize)]
pub struct MatchScoreVoteRequest {
    pub home_score: i32,
    pub away_score: i32,
}
