//! League handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::ApiResponse,
    middleware::auth::{AuthenticatedUser, require_admin},
    models::League,
    services::LeagueService,
    state::AppState,
};

use super::request::{CreateLeagueRequest, UpdateLeagueRequest};

/// List all leagues
pub async fn list_leagues(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<League>>>> {
    let leagues = LeagueService::list(state.db()).await?;
    Ok(ApiResponse::data(leagues))
}

/// Get a league by ID
pub async fn get_league(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<League>>> {
    let league = LeagueService::get(state.db(), id).await?;
    Ok(ApiResponse::data(league))
}

/// Create a league
pub async fn create_league(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateLeagueRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<League>>)> {
    require_admin(&auth_user)?;
    payload.validate()?;

    let league = LeagueService::create(
        state.db(),
        &payload.name,
        &payload.country,
        payload.logo_url.as_deref(),
    )
    .await?;

    Ok(ApiResponse::created("League created successfully", league))
}

/// Update a league
pub async fn update_league(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateLeagueRequest>,
) -> AppResult<Json<ApiResponse<League>>> {
    require_admin(&auth_user)?;
    payload.validate()?;

    let league = LeagueService::update(
        state.db(),
        id,
        payload.name.as_deref(),
        payload.country.as_deref(),
        payload.logo_url.as_deref(),
    )
    .await?;

    Ok(ApiResponse::with_message("League updated successfully", league))
}

/// Delete a league
pub async fn delete_league(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    require_admin(&auth_user)?;

    LeagueService::delete(state.db(), id).await?;
    Ok(ApiResponse::message("League deleted successfully"))
}
