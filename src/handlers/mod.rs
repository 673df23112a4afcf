//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.
//! Every successful response is wrapped in the `{success, message?, data?}`
//! envelope; errors render the matching `{success: false, message, error}`
//! shape via `AppError`.

pub mod auth;
pub mod comments;
pub mod health;
pub mod leagues;
pub mod matches;
pub mod predictions;
pub mod teams;
pub mod users;

use axum::{Json, Router, http::StatusCode, middleware};
use serde::Serialize;

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Standard success envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 with data
    pub fn data(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            message: None,
            data: Some(data),
        })
    }

    /// 200 with message and data
    pub fn with_message(message: impl Into<String>, data: T) -> Json<Self> {
        Json(Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        })
    }

    /// 201 with message and data
    pub fn created(message: impl Into<String>, data: T) -> (StatusCode, Json<Self>) {
        (StatusCode::CREATED, Self::with_message(message, data))
    }
}

impl ApiResponse<()> {
    /// 200 with message only
    pub fn message(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            message: Some(message.into()),
            data: None,
        })
    }
}

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes())
        .nest(
            "/users",
            users::routes().route_layer(middleware::from_fn(auth_middleware)),
        )
        .nest("/leagues", leagues::routes())
        .nest("/teams", teams::routes())
        .nest("/matches", matches::routes().merge(comments::routes()))
        .nest("/predictions", predictions::routes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_omits_absent_fields() {
        let body = serde_json::to_value(&ApiResponse::data(7).0).unwrap();
        assert_eq!(body, serde_json::json!({"success": true, "data": 7}));

        let body = serde_json::to_value(&ApiResponse::message("done").0).unwrap();
        assert_eq!(body, serde_json::json!({"success": true, "message": "done"}));
    }
}
