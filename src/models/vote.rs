//! Vote ledger and aggregate models
//!
//! Two independent sources of votes exist for every match: regular users and
//! admin "baseline" votes. Both ledgers live in the same tables, discriminated
//! by a `voter_class` column, and are summed at read time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Which side of a match a vote predicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Home,
    Draw,
    Away,
}

impl Winner {
    pub const ALL: [Winner; 3] = [Winner::Home, Winner::Draw, Winner::Away];

    /// Parse a winner from its wire representation
    pub fn parse(value: &str) -> Option<Winner> {
        match value {
            "Home" => Some(Winner::Home),
            "Draw" => Some(Winner::Draw),
            "Away" => Some(Winner::Away),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Winner::Home => "Home",
            Winner::Draw => "Draw",
            Winner::Away => "Away",
        }
    }

    /// Derive the implied winner from an exact scoreline
    pub fn from_scoreline(home_score: i32, away_score: i32) -> Winner {
        if home_score > away_score {
            Winner::Home
        } else if away_score > home_score {
            Winner::Away
        } else {
            Winner::Draw
        }
    }
}

/// Source of a vote: a regular user or an admin-set baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoterClass {
    User,
    Admin,
}

impl VoterClass {
    pub fn parse(value: &str) -> Option<VoterClass> {
        match value {
            "user" => Some(VoterClass::User),
            "admin" => Some(VoterClass::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VoterClass::User => "user",
            VoterClass::Admin => "admin",
        }
    }
}

/// Outcome vote ledger row (one row per cast vote)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct OutcomeVote {
    pub vote_id: i64,
    pub match_id: i64,
    pub voter_id: i64,
    pub voter_class: String,
    pub predicted_winner: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Score prediction ledger row
///
/// Stores a pre-aggregated running tally per distinct scoreline, not one row
/// per voter. This asymmetry with [`OutcomeVote`] is deliberate.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ScorePrediction {
    pub score_pred_id: i64,
    pub match_id: i64,
    pub home_score: i32,
    pub away_score: i32,
    pub vote_count: i64,
    pub voter_class: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user's current score pick for a match (one active pick per user per match)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UserScorePick {
    pub pick_id: i64,
    pub match_id: i64,
    pub user_id: i64,
    pub home_score: i32,
    pub away_score: i32,
    pub updated_at: DateTime<Utc>,
}

/// Cached per-class vote aggregate for a match
///
/// Derived from the ledgers by a recompute, never independently authoritative.
/// Invariant after every recompute: `home + draw + away == total`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MatchVoteCounts {
    pub vote_count_id: i64,
    pub match_id: i64,
    pub voter_class: String,
    pub home_votes: i64,
    pub draw_votes: i64,
    pub away_votes: i64,
    pub total_votes: i64,
    pub updated_at: DateTime<Utc>,
}

/// Editorial win/draw/away probabilities set by admins, distinct from
/// the vote-derived aggregates
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub outcome_id: i64,
    pub match_id: i64,
    pub home_win_prob: f64,
    pub draw_prob: f64,
    pub away_win_prob: f64,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_round_trip() {
        for winner in Winner::ALL {
            assert_eq!(Winner::parse(winner.as_str()), Some(winner));
        }
        assert_eq!(Winner::parse("home"), None);
        assert_eq!(Winner::parse(""), None);
    }

    #[test]
    fn test_winner_from_scoreline() {
        assert_eq!(Winner::from_scoreline(2, 1), Winner::Home);
        assert_eq!(Winner::from_scoreline(0, 3), Winner::Away);
        assert_eq!(Winner::from_scoreline(1, 1), Winner::Draw);
        assert_eq!(Winner::from_scoreline(0, 0), Winner::Draw);
    }

    #[test]
    fn test_voter_class_parse() {
        assert_eq!(VoterClass::parse("user"), Some(VoterClass::User));
        assert_eq!(VoterClass::parse("admin"), Some(VoterClass::Admin));
        assert_eq!(VoterClass::parse("Admin"), None);
    }
}
