//! Match management handlers

mod handler;
pub mod request;

pub use handler::*;
pub use request::*;

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Match routes, including the per-match detail endpoints
pub fn routes() -> Router<AppState> {
    Router::new()
        // Public reads
        .route("/", get(handler::list_matches))
        .route("/{id}", get(handler::get_match))
        .route("/{id}/outcomes", get(handler::get_outcomes))
        .route("/{id}/vote-counts", get(handler::get_vote_counts))
        .route("/{id}/predictions", get(handler::get_score_predictions))
        // Authenticated writes
        .merge(
            Router::new()
                .route("/", post(handler::create_match))
                .route("/{id}", put(handler::update_match))
                .route("/{id}", delete(handler::delete_match))
                .route("/{id}/outcomes", post(handler::set_outcomes))
                .route("/{id}/vote-counts", post(handler::override_vote_counts))
                .route("/{id}/predictions", post(handler::vote_score))
                .route_layer(middleware::from_fn(auth_middleware)),
        )
}
