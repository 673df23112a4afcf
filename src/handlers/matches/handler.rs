//! Match handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    handlers::ApiResponse,
    middleware::auth::{AuthenticatedUser, require_admin},
    models::{Match, MatchVoteCounts, MatchWithDetails, ScorePrediction, VoterClass},
    services::{
        MatchService, VoteService,
        match_service::OutcomeProbabilities,
        vote_service::{CombinedVoteCounts, ScoreVoteResult},
    },
    state::AppState,
    utils::validation,
};

use super::request::{
    CreateMatchRequest, ListMatchesQuery, MatchScoreVoteRequest, OverrideVoteCountsRequest,
    SetOutcomesRequest, UpdateMatchRequest,
};

/// List matches with optional filters
pub async fn list_matches(
    State(state): State<AppState>,
    Query(query): Query<ListMatchesQuery>,
) -> AppResult<Json<ApiResponse<Vec<MatchWithDetails>>>> {
    let matches = MatchService::list(
        state.db(),
        query.league_id,
        query.date,
        query.status.as_deref(),
    )
    .await?;

    Ok(ApiResponse::data(matches))
}

/// Get a match with team and league details
pub async fn get_match(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<MatchWithDetails>>> {
    let fixture = MatchService::get(state.db(), id).await?;
    Ok(ApiResponse::data(fixture))
}

/// Create a match
pub async fn create_match(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateMatchRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Match>>)> {
    require_admin(&auth_user)?;
    payload.validate()?;

    let fixture = MatchService::create(state.db(), payload).await?;
    Ok(ApiResponse::created("Match created successfully", fixture))
}

/// Update a match (partial)
pub async fn update_match(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateMatchRequest>,
) -> AppResult<Json<ApiResponse<Match>>> {
    require_admin(&auth_user)?;
    payload.validate()?;

    let fixture = MatchService::update(state.db(), id, payload).await?;
    Ok(ApiResponse::with_message("Match updated successfully", fixture))
}

/// Delete a match
pub async fn delete_match(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    require_admin(&auth_user)?;

    MatchService::delete(state.db(), id).await?;
    Ok(ApiResponse::message("Match deleted successfully"))
}

// ============================================================================
// Editorial outcome probabilities
// ============================================================================

/// Get editorial win/draw/away probabilities (zeros when unset)
pub async fn get_outcomes(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<OutcomeProbabilities>>> {
    MatchService::ensure_exists(state.db(), id).await?;

    let outcomes = MatchService::outcome_probabilities(state.db(), id).await?;
    Ok(ApiResponse::data(outcomes))
}

/// Set editorial win/draw/away probabilities
pub async fn set_outcomes(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<SetOutcomesRequest>,
) -> AppResult<Json<ApiResponse<OutcomeProbabilities>>> {
    require_admin(&auth_user)?;
    MatchService::ensure_exists(state.db(), id).await?;

    let outcomes = MatchService::set_outcome_probabilities(
        state.db(),
        id,
        payload.home_win_prob,
        payload.draw_prob,
        payload.away_win_prob,
    )
    .await?;

    Ok(ApiResponse::with_message("Match outcomes saved", outcomes))
}

// ============================================================================
// Vote counts
// ============================================================================

/// Combined vote counts and percentages for a match
pub async fn get_vote_counts(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<CombinedVoteCounts>>> {
    MatchService::ensure_exists(state.db(), id).await?;

    let counts = VoteService::combined_vote_counts(state.db(), id).await?;
    Ok(ApiResponse::data(counts))
}

/// Manual admin override of the baseline vote counts
pub async fn override_vote_counts(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<OverrideVoteCountsRequest>,
) -> AppResult<Json<ApiResponse<MatchVoteCounts>>> {
    require_admin(&auth_user)?;
    MatchService::ensure_exists(state.db(), id).await?;

    if payload.home_votes < 0 || payload.draw_votes < 0 || payload.away_votes < 0 {
        return Err(AppError::Validation("Vote counts cannot be negative".to_string()));
    }

    let counts = VoteService::override_admin_counts(
        state.db(),
        id,
        payload.home_votes,
        payload.draw_votes,
        payload.away_votes,
    )
    .await?;

    Ok(ApiResponse::with_message("Vote counts updated", counts))
}

// ============================================================================
// Score predictions
// ============================================================================

/// Score-prediction filter query
#[derive(Debug, Deserialize)]
pub struct ScorePredictionsQuery {
    /// user or admin; absent means both
    pub user_type: Option<String>,
}

/// Score predictions for a match, most popular first
pub async fn get_score_predictions(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<ScorePredictionsQuery>,
) -> AppResult<Json<ApiResponse<Vec<ScorePrediction>>>> {
    MatchService::ensure_exists(state.db(), id).await?;

    let class = parse_user_type(query.user_type.as_deref())?;
    let predictions = VoteService::list_score_predictions(state.db(), id, class).await?;

    Ok(ApiResponse::data(predictions))
}

/// Cast the authenticated user's score vote for a match
pub async fn vote_score(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<MatchScoreVoteRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<ScoreVoteResult>>)> {
    validation::validate_goal_count(payload.home_score)
        .map_err(|e| AppError::Validation(e.to_string()))?;
    validation::validate_goal_count(payload.away_score)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    MatchService::ensure_exists(state.db(), id).await?;

    let result = VoteService::vote_score(
        state.db(),
        id,
        auth_user.id,
        payload.home_score,
        payload.away_score,
    )
    .await?;

    let message = if result.unchanged {
        "Score prediction unchanged"
    } else {
        "Score prediction recorded"
    };

    Ok(ApiResponse::created(message, result))
}

fn parse_user_type(user_type: Option<&str>) -> AppResult<Option<VoterClass>> {
    match user_type {
        None => Ok(None),
        Some(value) => VoterClass::parse(value)
            .map(Some)
            .ok_or_else(|| AppError::Validation("Invalid user_type. Use 'user' or 'admin'".to_string())),
    }
}
