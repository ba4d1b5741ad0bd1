//! HTTP route table.
//!
//! Every route carries its full path: the health endpoint lives under the
//! `api/v1` prefix, the metrics endpoint sits at the bare `/metrics`. All
//! responses get permissive CORS headers, and both endpoints are marked
//! `no-store` so upstream caches never answer for a live process.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod metrics;

use axum::http::header::{HeaderValue, CACHE_CONTROL};
use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_NO_STORE, HEALTH_PATH, METRICS_PATH};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes, CORS and cache headers.
pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route(HEALTH_PATH, get(health::health))
        .route(METRICS_PATH, get(metrics::metrics))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    routes
        .with_state(state)
        .layer(CorsLayer::permissive())
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
