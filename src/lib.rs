//! Vitals: a liveness and Prometheus metrics service.
//!
//! Serves `GET /api/v1` with a JSON health payload and `GET /metrics` with
//! process and runtime metrics in the Prometheus text format.

pub mod config;
pub mod error;
pub mod http;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod status;

pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
