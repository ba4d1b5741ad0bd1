//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use crate::config::{AppConfig, ConfigError, HEALTH_PATH, METRICS_PATH};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    Address(#[from] ConfigError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Start the HTTP server described by `config`.
///
/// Installs signal handlers, announces the reachable URLs once bound, and
/// blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = config.http.socket_addr()?;
    let handle = Handle::new();

    shutdown::setup_shutdown_handler(handle.clone());
    spawn_announcement(handle.clone(), config);

    run_server(app, addr, handle).await
}

/// Serve `app` on `addr` until `handle` is shut down.
///
/// Bind failures are returned immediately; nothing retries.
pub async fn run_server(app: Router, addr: SocketAddr, handle: Handle) -> Result<(), ServerError> {
    tracing::debug!(%addr, "Binding HTTP listener");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Logs the two base URLs after the listener is up.
fn spawn_announcement(handle: Handle, config: &AppConfig) {
    let http = config.http.clone();
    tokio::spawn(async move {
        // Resolves to None when binding failed; the bind error is reported by the caller
        if let Some(bound) = handle.listening().await {
            let base = http.public_url(bound.port());
            tracing::info!(%bound, "Application is running on: {}{}", base, HEALTH_PATH);
            tracing::info!(%bound, "Metrics is running on: {}{}", base, METRICS_PATH);
        }
    });
}
