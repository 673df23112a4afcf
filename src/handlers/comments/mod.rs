//! Match comment handlers
//!
//! Mounted alongside the match routes: every path here is relative to
//! `/matches`.

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Comment routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/{id}/comments", get(handler::list_comments))
        .route("/{id}/comments/{comment_id}/replies", get(handler::list_replies))
        .merge(
            Router::new()
                .route("/{id}/comments", post(handler::create_comment))
                .route("/{id}/comments/{comment_id}", put(handler::update_comment))
                .route("/{id}/comments/{comment_id}", delete(handler::delete_comment))
                .route(
                    "/{id}/comments/{comment_id}/reactions",
                    post(handler::react_to_comment),
                )
                .route_layer(middleware::from_fn(auth_middleware)),
        )
}
