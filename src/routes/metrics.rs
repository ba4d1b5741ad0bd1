//! Prometheus scrape endpoint.

use axum::{extract::State, http::header::CONTENT_TYPE, response::IntoResponse};
use tracing::instrument;

use crate::error::AppError;
use crate::metrics::TEXT_FORMAT;
use crate::state::AppState;

/// `GET /metrics`
///
/// Renders the registry in the Prometheus text exposition format. Reading
/// never mutates counters.
#[instrument(name = "metrics::scrape", skip_all)]
pub async fn metrics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let body = state.metrics.render_exposition()?;
    Ok(([(CONTENT_TYPE, TEXT_FORMAT)], body))
}
