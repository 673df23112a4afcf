//! Team management handlers

mod handler;
pub mod request;

pub use handler::*;
pub use request::*;

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Team routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_teams))
        .route("/{id}", get(handler::get_team))
        .merge(
            Router::new()
                .route("/", post(handler::create_team))
                .route("/{id}", put(handler::update_team))
                .route("/{id}", delete(handler::delete_team))
                .route_layer(middleware::from_fn(auth_middleware)),
        )
}
