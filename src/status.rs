//! Liveness status reporting.
//!
//! The reporter only proves that the answering process is alive. It has no
//! dependencies and cannot fail: uptime comes from a monotonic clock captured
//! at startup and the timestamp from the wall clock.

use std::time::Instant;

use serde::Serialize;

use crate::config::HEALTH_MESSAGE;

/// Health payload returned by `GET /api/v1`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub success: bool,
    pub message: &'static str,
    /// Wall-clock time in milliseconds since the Unix epoch
    pub timestamp: i64,
    /// Seconds since the reporter was created
    pub uptime: f64,
}

/// Computes [`HealthStatus`] on demand.
#[derive(Debug, Clone)]
pub struct StatusReporter {
    started: Instant,
}

impl StatusReporter {
    /// Creates a reporter whose uptime starts counting now.
    ///
    /// Construct this once at process startup.
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn get_health(&self) -> HealthStatus {
        HealthStatus {
            success: true,
            message: HEALTH_MESSAGE,
            timestamp: chrono::Utc::now().timestamp_millis(),
            uptime: self.uptime_seconds(),
        }
    }

    /// The instant uptime is measured from.
    pub fn started(&self) -> Instant {
        self.started
    }

    /// Non-negative and non-decreasing for the lifetime of the reporter.
    pub fn uptime_seconds(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

impl Default for StatusReporter {
    fn default() -> Self {
        Self::new()
    }
}
