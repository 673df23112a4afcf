//! Prediction (outcome and score vote) handlers

mod handler;
pub mod request;

pub use handler::*;
pub use request::*;

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Prediction routes
pub fn routes() -> Router<AppState> {
    Router::new()
        // Public reads
        .route("/", get(handler::list_predictions))
        .route("/admin-votes", get(handler::list_admin_votes))
        .route("/score/{match_id}", get(handler::list_score_predictions))
        .route("/{id}", get(handler::get_prediction))
        // Authenticated writes
        .merge(
            Router::new()
                .route("/", post(handler::create_prediction))
                .route("/{id}", put(handler::update_prediction))
                .route("/{id}", delete(handler::delete_prediction))
                .route("/admin-vote", post(handler::create_admin_vote))
                .route("/score", post(handler::create_score_vote))
                .route("/votes", delete(handler::remove_all_votes))
                .route_layer(middleware::from_fn(auth_middleware)),
        )
}
