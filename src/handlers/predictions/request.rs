//! Prediction request DTOs

use serde::Deserialize;

/// Cast an outcome vote
#[derive(Debug, Deserialize)]
pub struct CreatePredictionRequest {
    pub match_id: i64,

    /// Home, Draw, or Away
    pub predicted_winner: String,
}

/// Change an outcome vote's pick
#[derive(Debug, Deserialize)]
pub struct UpdatePredictionRequest {
    pub predicted_winner: String,
}

/// Cast a score vote
#[derive(Debug, Deserialize)]
pub struct ScoreVoteRequest {
    pub match_id: i64,
    pub home_score: i32,
    pub away_score: i32,
}

/// Prediction list query parameters
#[derive(Debug, Deserialize)]
pub struct ListPredictionsQuery {
    pub match_id: Option<i64>,
    pub user_id: Option<i64>,
    /// user or admin
    pub user_type: Option<String>,
}
