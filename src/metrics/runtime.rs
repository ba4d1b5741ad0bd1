//! Collector for values that only exist at read time.

use std::time::Instant;

use prometheus::core::{Collector, Desc};
use prometheus::proto::MetricFamily;
use prometheus::{Gauge, IntGauge, Opts};
use tokio::runtime::Handle;

/// Samples process uptime and Tokio runtime gauges on every scrape.
///
/// Runtime gauges are only reported when a Tokio runtime was current at
/// construction. Each gauge is an atomic cell, so every emitted sample is
/// internally consistent even while scrapes run concurrently.
pub struct RuntimeCollector {
    started: Instant,
    runtime: Option<Handle>,
    uptime: Gauge,
    workers: IntGauge,
    alive_tasks: IntGauge,
    descs: Vec<Desc>,
}

impl RuntimeCollector {
    pub fn new(started: Instant) -> prometheus::Result<Self> {
        let uptime = Gauge::with_opts(Opts::new(
            "process_uptime_seconds",
            "Seconds since the process started",
        ))?;
        let workers = IntGauge::with_opts(Opts::new(
            "tokio_runtime_workers",
            "Number of worker threads in the Tokio runtime",
        ))?;
        let alive_tasks = IntGauge::with_opts(Opts::new(
            "tokio_runtime_alive_tasks",
            "Number of tasks currently alive in the Tokio runtime",
        ))?;

        let runtime = Handle::try_current().ok();

        let mut descs: Vec<Desc> = uptime.desc().into_iter().cloned().collect();
        if runtime.is_some() {
            descs.extend(workers.desc().into_iter().cloned());
            descs.extend(alive_tasks.desc().into_iter().cloned());
        }

        Ok(Self {
            started,
            runtime,
            uptime,
            workers,
            alive_tasks,
            descs,
        })
    }

    pub fn has_runtime(&self) -> bool {
        self.runtime.is_some()
    }
}

impl Collector for RuntimeCollector {
    fn desc(&self) -> Vec<&Desc> {
        self.descs.iter().collect()
    }

    fn collect(&self) -> Vec<MetricFamily> {
        self.uptime.set(self.started.elapsed().as_secs_f64());
        let mut families = self.uptime.collect();

        if let Some(runtime) = &self.runtime {
            let metrics = runtime.metrics();
            self.workers
                .set(i64::try_from(metrics.num_workers()).unwrap_or(i64::MAX));
            self.alive_tasks
                .set(i64::try_from(metrics.num_alive_tasks()).unwrap_or(i64::MAX));
            families.extend(self.workers.collect());
            families.extend(self.alive_tasks.collect());
        }

        families
    }
}
