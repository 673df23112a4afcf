//! Team handler implementations

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
    models::Team,
    services::TeamService,
    state::AppState,
};

use super::request::{CreateTeamRequest, UpdateTeamRequest};

/// List all teams
pub async fn list_teams(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<Team>>>> {
    let teams = TeamService::list(state.db()).await?;
    Ok(ApiResponse::data(teams))
}

/// Get a team by ID
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Team>>> {
    let team = TeamService::get(state.db(), id).await?;
    Ok(ApiResponse::data(team))
}

/// Create a team
pub async fn create_team(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateTeamRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Team>>)> {
    require_admin(&auth_user)?;
    payload.validate()?;

    let team = TeamService::create(
        state.db(),
        &payload.name,
        &payload.short_code,
        &payload.country,
        &payload.team_type,
        payload.logo_url.as_deref(),
    )
    .await?;

    Ok(ApiResponse::created("Team created successfully", team))
}

/// Update a team
pub async fn update_team(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTeamRequest>,
) -> AppResult<Json<ApiResponse<Team>>> {
    require_admin(&auth_user)?;
    payload.validate()?;

    let team = TeamService::update(
        state.db(),
        id,
        payload.name.as_deref(),
        payload.short_code.as_deref(),
        payload.country.as_deref(),
        payload.team_type.as_deref(),
        payload.logo_url.as_deref(),
    )
    .await?;

    Ok(ApiResponse::with_message("Team updated successfully", team))
}

/// Delete a team
pub async fn delete_team(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    require_admin(&auth_user)?;

    TeamService::delete(state.db(), id).await?;
    Ok(ApiResponse::message("Team deleted successfully"))
}
