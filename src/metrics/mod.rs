//! Process and runtime metrics in Prometheus text format.
//!
//! A [`MetricsRegistry`] is constructed once at startup and shared with the
//! `/metrics` handler through application state:
//!
//! ```ignore
//! use std::sync::Arc;
//! use vitals::metrics::MetricsRegistry;
//! use vitals::status::StatusReporter;
//!
//! let status = StatusReporter::new();
//! let registry = Arc::new(MetricsRegistry::new(status.started())?);
//! let body = registry.render_exposition()?;
//! ```
//!
//! Default collectors are the `prometheus` process collector (Linux only)
//! and [`RuntimeCollector`], which samples uptime and Tokio runtime gauges
//! at scrape time.

mod registry;
mod runtime;

pub use prometheus::TEXT_FORMAT;
pub use registry::{MetricsError, MetricsRegistry};
pub use runtime::RuntimeCollector;
