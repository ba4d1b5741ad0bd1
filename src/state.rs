//! Shared application state for request handlers.

use std::sync::Arc;

use crate::metrics::MetricsRegistry;
use crate::status::StatusReporter;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Holds exactly one status reporter and one metrics registry, both built
/// once at startup.
#[derive(Clone)]
pub struct AppState {
    pub status: Arc<StatusReporter>,
    pub metrics: Arc<MetricsRegistry>,
}

impl AppState {
    /// Creates a new application state from already constructed components.
    pub fn new(status: StatusReporter, metrics: MetricsRegistry) -> Self {
        Self {
            status: Arc::new(status),
            metrics: Arc::new(metrics),
        }
    }
}
