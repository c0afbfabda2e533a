//! HTTP API server

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route(
            "/albums",
            get(handlers::list_albums).post(handlers::create_album),
        )
        .route("/albums/:id", get(handlers::get_album))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Convenience helper serving the startup seed records
pub fn create_seeded_router() -> Router {
    create_router(AppState::seeded())
}
