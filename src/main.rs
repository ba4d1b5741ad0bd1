//! Vitals: liveness and metrics endpoints.
//!
//! This is the application entry point. It initializes tracing, resolves
//! configuration from an optional TOML file and the `PORT` variable, builds
//! the status reporter and metrics registry, and starts the HTTP server.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitals::config::{AppConfig, LoggingConfig, DEFAULT_LOG_FILTER};
use vitals::http::start_server;
use vitals::metrics::MetricsRegistry;
use vitals::status::StatusReporter;
use vitals::{create_router, AppState};

/// Vitals: health and Prometheus metrics over HTTP
#[derive(Parser, Debug)]
#[command(name = "vitals", version, about)]
struct Args {
    /// Path to an optional configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level filter (e.g., "vitals=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Uptime starts counting before anything else
    let status = StatusReporter::new();

    let args = Args::parse();

    let config = AppConfig::resolve(args.config.as_deref())?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, &config.logging);

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        log_format = %config.logging.format,
        "Loaded configuration"
    );

    let metrics = MetricsRegistry::new(status.started())?;
    tracing::info!("Initialized metrics registry");

    let state = AppState::new(status, metrics);
    let app = create_router(state);

    if let Err(e) = start_server(app, &config).await {
        tracing::error!(error = %e, "Server failed");
        return Err(e.into());
    }

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(filter: &str, logging: &LoggingConfig) {
    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(filter));

    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
