use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::metrics::MetricsError;

/// Errors a request handler can surface to the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Metrics collection error: {0}")]
    Metrics(#[from] MetricsError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Metrics(_) => {
                tracing::error!(error = %self, "Failed to render metrics");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Metrics collection failed",
                )
            }
        };

        (status, message).into_response()
    }
}
