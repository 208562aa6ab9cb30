//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe that returns 200 OK when the process is running.
//! Used by Kubernetes, ECS, systemd, and load balancers to verify the service
//! is alive.

use axum::extract::State;
use axum::Json;
use http::StatusCode;
use serde::Serialize;

use crate::state::AppState;

/// Health check response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: &'static str,
}

/// Health check handler.
///
/// Unconditionally answers 200 with `{"message":"Ready!"}` - this is a
/// liveness probe, it only checks that the process can respond to HTTP.
/// Each invocation is recorded to the audit logger; logging outcome never
/// affects the response.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    state.logger.info("Ran healthcheck");
    (StatusCode::OK, Json(HealthResponse { message: "Ready!" }))
}
