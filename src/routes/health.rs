//! Health check endpoint for container orchestration.
//!
//! A liveness probe: it only confirms that the process can answer HTTP, not
//! that anything it depends on is healthy.

use axum::{extract::State, Json};

use crate::state::AppState;
use crate::status::HealthStatus;

/// `GET /api/v1`
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(state.status.get_health())
}
