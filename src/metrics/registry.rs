//! Prometheus registry wrapper.

use std::time::Instant;

use prometheus::core::Collector;
use prometheus::{Encoder, Registry, TextEncoder};

use super::runtime::RuntimeCollector;

#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("Failed to register collector: {0}")]
    Register(#[source] prometheus::Error),

    #[error("Failed to encode metrics: {0}")]
    Encode(#[source] prometheus::Error),

    #[error("Encoded metrics are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Owns the process-wide Prometheus registry.
///
/// Created once at startup and shared behind an `Arc`. Collectors are
/// registered up front and never removed; rendering only reads them.
#[derive(Clone)]
pub struct MetricsRegistry {
    registry: Registry,
}

impl MetricsRegistry {
    /// Creates a fresh registry with the default process and runtime collectors.
    ///
    /// `started` is the process start instant shared with the status reporter,
    /// so `process_uptime_seconds` agrees with the health payload.
    pub fn new(started: Instant) -> Result<Self, MetricsError> {
        let metrics = Self {
            registry: Registry::new(),
        };

        #[cfg(target_os = "linux")]
        metrics.register(Box::new(
            prometheus::process_collector::ProcessCollector::for_self(),
        ))?;

        let runtime = RuntimeCollector::new(started).map_err(MetricsError::Register)?;
        if !runtime.has_runtime() {
            tracing::debug!("No Tokio runtime at registry construction, runtime gauges disabled");
        }
        metrics.register(Box::new(runtime))?;

        Ok(metrics)
    }

    /// Registers an additional collector. Metric names must be unique.
    pub fn register(&self, collector: Box<dyn Collector>) -> Result<(), MetricsError> {
        self.registry
            .register(collector)
            .map_err(MetricsError::Register)
    }

    /// Encodes every registered metric in the Prometheus text format.
    pub fn render_exposition(&self) -> Result<String, MetricsError> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(MetricsError::Encode)?;
        Ok(String::from_utf8(buffer)?)
    }
}
