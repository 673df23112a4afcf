//! User management handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::{ApiResponse, auth::response::UserResponse},
    middleware::auth::{AuthenticatedUser, require_admin},
    services::UserService,
    state::AppState,
};

use super::request::{CreateUserRequest, UpdateUserRequest};

/// List all users
pub async fn list_users(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<ApiResponse<Vec<UserResponse>>>> {
    require_admin(&auth_user)?;

    let users = UserService::list(state.db()).await?;
    Ok(ApiResponse::data(users.into_iter().map(Into::into).collect()))
}

/// Get a user by ID
pub async fn get_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    require_admin(&auth_user)?;

    let user = UserService::get(state.db(), id).await?;
    Ok(ApiResponse::data(user.into()))
}

/// Create a user with an explicit role
pub async fn create_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<UserResponse>>)> {
    require_admin(&auth_user)?;
    payload.validate()?;

    let user = UserService::create(
        state.db(),
        &payload.name,
        &payload.email,
        &payload.password,
        &payload.role,
        payload.avatar_url.as_deref(),
        payload.favorite_team_id,
    )
    .await?;

    Ok(ApiResponse::created("User created successfully", user.into()))
}

/// Update a user
pub async fn update_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUserRequest>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    require_admin(&auth_user)?;
    payload.validate()?;

    let user = UserService::update(
        state.db(),
        id,
        payload.name.as_deref(),
        payload.email.as_deref(),
        payload.password.as_deref(),
        payload.role.as_deref(),
        payload.avatar_url.as_deref(),
        payload.favorite_team_id,
    )
    .await?;

    Ok(ApiResponse::with_message("User updated successfully", user.into()))
}

/// Delete a user
pub async fn delete_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    require_admin(&auth_user)?;

    UserService::delete(state.db(), id).await?;
    Ok(ApiResponse::message("User deleted successfully"))
}
