//! Auth handler implementations

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    handlers::ApiResponse,
    middleware::auth::AuthenticatedUser,
    services::{AuthService, UserService},
    state::AppState,
};

use super::{
    request::{LoginRequest, RegisterRequest},
    response::{AuthResponse, UserResponse},
};

/// Register a new user account
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<AuthResponse>>)> {
    payload.validate()?;

    let user = AuthService::register(
        state.db(),
        &payload.name,
        &payload.email,
        &payload.password,
        payload.avatar_url.as_deref(),
        payload.favorite_team_id,
    )
    .await?;

    let token = AuthService::generate_token(
        &user,
        &state.config().jwt.secret,
        state.config().jwt.expiry_hours,
    )?;

    Ok(ApiResponse::created(
        "User registered successfully",
        AuthResponse {
            token,
            user: user.into(),
        },
    ))
}

/// Login with email and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<AuthResponse>>> {
    payload.validate().map_err(|_| AppError::InvalidCredentials)?;

    let (user, token) =
        AuthService::login(state.db(), state.config(), &payload.email, &payload.password).await?;

    Ok(ApiResponse::with_message(
        "Login successful",
        AuthResponse {
            token,
            user: user.into(),
        },
    ))
}

/// Current user's profile
pub async fn profile(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let user = UserService::get(state.db(), auth_user.id).await?;
    Ok(ApiResponse::data(user.into()))
}
