//! HTTP route handlers.
//!
//! The health check is served on two paths: `/api`, the path the service has
//! always answered on, and `/health`, the conventional probe path. Request
//! tracing comes from tower-http's `TraceLayer`.

pub mod health;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Creates the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api", get(health::health))
        .route("/health", get(health::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
