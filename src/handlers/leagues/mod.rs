//! League management handlers

mod handler;
pub mod request;

pub use handler::*;
pub use request::*;

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// League routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_leagues))
        .route("/{id}", get(handler::get_league))
        .merge(
            Router::new()
                .route("/", post(handler::create_league))
                .route("/{id}", put(handler::update_league))
                .route("/{id}", delete(handler::delete_league))
                .route_layer(middleware::from_fn(auth_middleware)),
        )
}
