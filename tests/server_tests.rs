//! End-to-end tests against a real listener.
//!
//! Each test binds the router on an ephemeral port and talks to it over TCP
//! with reqwest, so routing, CORS and the server lifecycle are exercised
//! together.
//!
//! Run with: cargo test --test server_tests

use std::net::{SocketAddr, TcpListener};
use std::time::Duration;

use axum_server::Handle;
use vitals::config::AppConfig;
use vitals::http::{run_server, start_server, ServerError};
use vitals::metrics::MetricsRegistry;
use vitals::status::StatusReporter;
use vitals::{create_router, AppState};

/// A running server that shuts down when dropped.
struct TestServer {
    addr: SocketAddr,
    handle: Handle,
}

impl TestServer {
    async fn start() -> Self {
        let status = StatusReporter::new();
        let metrics = MetricsRegistry::new(status.started()).expect("metrics registry");
        let app = create_router(AppState::new(status, metrics));
        let handle = Handle::new();

        let server_handle = handle.clone();
        tokio::spawn(async move {
            run_server(app, "127.0.0.1:0".parse().unwrap(), server_handle)
                .await
                .expect("server failed");
        });

        let addr = tokio::time::timeout(Duration::from_secs(5), handle.listening())
            .await
            .expect("server did not start in time")
            .expect("server failed to bind");

        Self { addr, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.shutdown();
    }
}

#[tokio::test]
async fn health_endpoint_reports_liveness() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let mut last_uptime = 0.0;
    for _ in 0..5 {
        let response = client.get(server.url("/api/v1")).send().await.unwrap();
        assert_eq!(response.status(), 200);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "API is running");

        let now = chrono::Utc::now().timestamp_millis();
        let timestamp = body["timestamp"].as_i64().expect("integer timestamp");
        assert!((now - timestamp).abs() <= 2_000);

        let uptime = body["uptime"].as_f64().expect("float uptime");
        assert!(uptime >= last_uptime);
        last_uptime = uptime;
    }
}

#[tokio::test]
async fn metrics_endpoint_serves_exposition_format() {
    let server = TestServer::start().await;

    let response = reqwest::get(server.url("/metrics")).await.unwrap();
    assert_eq!(response.status(), 200);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"), "{content_type}");

    let body = response.text().await.unwrap();
    assert!(body.lines().any(|l| l.starts_with("process_uptime_seconds ")));
    assert!(body.lines().any(|l| l.starts_with("tokio_runtime_workers ")));
}

#[tokio::test]
async fn cors_headers_on_both_endpoints() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    for path in ["/api/v1", "/metrics"] {
        let response = client
            .get(server.url(path))
            .header("Origin", "https://elsewhere.example")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        assert!(response
            .headers()
            .contains_key("access-control-allow-origin"));

        let preflight = client
            .request(reqwest::Method::OPTIONS, server.url(path))
            .header("Origin", "https://elsewhere.example")
            .header("Access-Control-Request-Method", "GET")
            .send()
            .await
            .unwrap();
        assert!(preflight.status().is_success());
        assert!(preflight
            .headers()
            .contains_key("access-control-allow-origin"));
    }
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let server = TestServer::start().await;

    let response = reqwest::get(server.url("/api/v1/unknown")).await.unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn port_in_use_is_a_bind_error() {
    let occupied = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = occupied.local_addr().unwrap();

    let status = StatusReporter::new();
    let metrics = MetricsRegistry::new(status.started()).unwrap();
    let app = create_router(AppState::new(status, metrics));
    let result = run_server(app, addr, Handle::new()).await;

    match result {
        Err(ServerError::Bind { addr: failed, .. }) => assert_eq!(failed, addr),
        other => panic!("expected bind error, got {other:?}"),
    }
}

#[tokio::test]
async fn unparseable_listen_address_is_rejected() {
    let mut config = AppConfig::default();
    config.http.host = "not a host".to_string();

    let status = StatusReporter::new();
    let metrics = MetricsRegistry::new(status.started()).unwrap();
    let result = start_server(create_router(AppState::new(status, metrics)), &config).await;

    assert!(matches!(result, Err(ServerError::Address(_))), "{result:?}");
}
