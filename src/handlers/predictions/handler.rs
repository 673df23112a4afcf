//! Prediction handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::{
    constants::roles,
    error::{AppError, AppResult},
    handlers::ApiResponse,
    middleware::auth::{AuthenticatedUser, require_admin},
    models::{OutcomeVote, ScorePrediction, VoterClass, Winner},
    services::{
        MatchService, VoteService,
        vote_service::{OutcomeVoteResult, ScoreVoteResult},
    },
    state::AppState,
    utils::validation,
};

use super::request::{
    CreatePredictionRequest, ListPredictionsQuery, ScoreVoteRequest, UpdatePredictionRequest,
};

/// List outcome votes with optional filters
pub async fn list_predictions(
    State(state): State<AppState>,
    Query(query): Query<ListPredictionsQuery>,
) -> AppResult<Json<ApiResponse<Vec<OutcomeVote>>>> {
    let class = parse_user_type(query.user_type.as_deref())?;

    let votes =
        VoteService::list_votes(state.db(), query.match_id, query.user_id, class).await?;

    Ok(ApiResponse::data(votes))
}

/// Get an outcome vote by ID
pub async fn get_prediction(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<OutcomeVote>>> {
    let vote = VoteService::get_vote(state.db(), id).await?;
    Ok(ApiResponse::data(vote))
}

/// Cast the authenticated user's outcome vote (one active vote per match)
pub async fn create_prediction(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreatePredictionRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<OutcomeVoteResult>>)> {
    let winner = parse_winner(&payload.predicted_winner)?;
    MatchService::ensure_exists(state.db(), payload.match_id).await?;

    let result = VoteService::vote_outcome(
        state.db(),
        payload.match_id,
        auth_user.id,
        VoterClass::User,
        winner,
    )
    .await?;

    let message = if result.updated_existing {
        "Prediction updated successfully"
    } else {
        "Prediction recorded successfully"
    };

    Ok(ApiResponse::created(message, result))
}

/// Change an outcome vote's pick (owner or admin)
pub async fn update_prediction(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePredictionRequest>,
) -> AppResult<Json<ApiResponse<OutcomeVote>>> {
    let winner = parse_winner(&payload.predicted_winner)?;
    check_vote_access(&state, &auth_user, id).await?;

    let vote = VoteService::update_vote(state.db(), id, winner).await?;
    Ok(ApiResponse::with_message("Prediction updated successfully", vote))
}

/// Delete an outcome vote (owner or admin)
pub async fn delete_prediction(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    check_vote_access(&state, &auth_user, id).await?;

    VoteService::delete_vote(state.db(), id).await?;
    Ok(ApiResponse::message("Prediction deleted successfully"))
}

// ============================================================================
// Admin baseline votes
// ============================================================================

/// Cast an admin baseline outcome vote; every call inserts a new ledger row
pub async fn create_admin_vote(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreatePredictionRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<OutcomeVoteResult>>)> {
    require_admin(&auth_user)?;
    let winner = parse_winner(&payload.predicted_winner)?;
    MatchService::ensure_exists(state.db(), payload.match_id).await?;

    let result = VoteService::vote_outcome(
        state.db(),
        payload.match_id,
        auth_user.id,
        VoterClass::Admin,
        winner,
    )
    .await?;

    Ok(ApiResponse::created("Admin vote recorded successfully", result))
}

/// List all admin baseline outcome votes
pub async fn list_admin_votes(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<OutcomeVote>>>> {
    let votes = VoteService::list_votes(state.db(), None, None, Some(VoterClass::Admin)).await?;
    Ok(ApiResponse::data(votes))
}

// ============================================================================
// Score votes
// ============================================================================

/// Score predictions for a match, most popular first
pub async fn list_score_predictions(
    State(state): State<AppState>,
    Path(match_id): Path<i64>,
) -> AppResult<Json<ApiResponse<Vec<ScorePrediction>>>> {
    let predictions = VoteService::list_score_predictions(state.db(), match_id, None).await?;
    Ok(ApiResponse::data(predictions))
}

/// Cast a score vote; admins add baseline rows, users move their single pick
pub async fn create_score_vote(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<ScoreVoteRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<ScoreVoteResult>>)> {
    validation::validate_goal_count(payload.home_score)
        .map_err(|e| AppError::Validation(e.to_string()))?;
    validation::validate_goal_count(payload.away_score)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    MatchService::ensure_exists(state.db(), payload.match_id).await?;

    if auth_user.is_admin() {
        let prediction = VoteService::admin_vote_score(
            state.db(),
            payload.match_id,
            payload.home_score,
            payload.away_score,
        )
        .await?;

        return Ok(ApiResponse::created(
            "Admin score vote recorded",
            ScoreVoteResult {
                prediction,
                unchanged: false,
            },
        ));
    }

    let result = VoteService::vote_score(
        state.db(),
        payload.match_id,
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

// ============================================================================
// Maintenance
// ============================================================================

/// Remove every vote in the system and zero all cached aggregates
pub async fn remove_all_votes(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<ApiResponse<()>>> {
    require_admin(&auth_user)?;

    VoteService::remove_all_votes(state.db()).await?;
    Ok(ApiResponse::message("All votes removed"))
}

// ============================================================================
// Helpers
// ============================================================================

fn parse_winner(value: &str) -> AppResult<Winner> {
    Winner::parse(value).ok_or_else(|| {
        AppError::Validation("Invalid predicted_winner. Use 'Home', 'Draw', or 'Away'".to_string())
    })
}

fn parse_user_type(user_type: Option<&str>) -> AppResult<Option<VoterClass>> {
    match user_type {
        None => Ok(None),
        Some(value) => VoterClass::parse(value)
            .map(Some)
            .ok_or_else(|| AppError::Validation("Invalid user_type. Use 'user' or 'admin'".to_string())),
    }
}

/// Owner-or-admin check on a vote ledger row
async fn check_vote_access(
    state: &AppState,
    auth_user: &AuthenticatedUser,
    vote_id: i64,
) -> AppResult<()> {
    if auth_user.is_admin() {
        return Ok(());
    }

    let vote = VoteService::get_vote(state.db(), vote_id).await?;
    if vote.voter_id != auth_user.id || vote.voter_class != roles::USER {
        return Err(AppError::Forbidden(
            "You can only modify your own predictions".to_string(),
        ));
    }

    Ok(())
}
