use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use envconfig::Envconfig;
use status_sim::model::{HealthStatus, ProcessResult, RootInfo, RuntimeStatus};
use status_sim::worker::{WORKER_COUNT, WORKER_DELAY, completion_tag};
use status_sim::{Config, ServiceContext, ServiceError, build_router};
use tower::ServiceExt;

fn test_app(env: &[(&str, &str)]) -> Result<Router> {
    let env: HashMap<String, String> = env
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let config = Config::init_from_hashmap(&env)?;
    Ok(build_router(Arc::new(ServiceContext::new(config))))
}

async fn get_json<T: serde::de::DeserializeOwned>(
    app: &Router,
    uri: &str,
) -> Result<T> {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "application/json",
        "content type of {}",
        uri
    );
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&body)?)
}

#[tokio::test]
async fn health_reports_running() -> Result<()> {
    let app = test_app(&[("GO_PORT", "9001")])?;
    let health: HealthStatus = get_json(&app, "/health").await?;
    assert_eq!(health.service, "status-sim");
    assert_eq!(health.status, "running");
    assert_eq!(health.port, 9001);
    assert!(health.message.contains("Orchestrated by JavaScript"));
    assert!(health.runtime_version.starts_with("rustc"));
    assert!(health.uptime.ends_with('s'));
    Ok(())
}

#[tokio::test]
async fn health_has_all_wire_fields() -> Result<()> {
    let app = test_app(&[])?;
    let raw: serde_json::Value = get_json(&app, "/health").await?;
    for field in
        ["service", "status", "message", "port", "runtime_version", "uptime"]
    {
        assert!(raw.get(field).is_some(), "missing {}", field);
    }
    Ok(())
}

#[tokio::test]
async fn uptime_is_non_decreasing() -> Result<()> {
    let app = test_app(&[])?;
    let first: HealthStatus = get_json(&app, "/health").await?;
    tokio::time::sleep(Duration::from_millis(20)).await;
    let second: HealthStatus = get_json(&app, "/health").await?;
    assert!(second.uptime_seconds >= first.uptime_seconds);
    assert!(second.uptime_seconds - first.uptime_seconds >= 0.019);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn process_collects_every_worker() -> Result<()> {
    let app = test_app(&[])?;
    let result: ProcessResult = get_json(&app, "/process").await?;
    assert_eq!(result.action, "concurrent_processing");
    assert_eq!(result.workers, WORKER_COUNT);
    assert_eq!(result.data.len(), WORKER_COUNT);
    let tags: HashSet<_> = result.data.iter().cloned().collect();
    let expected: HashSet<_> = (0..WORKER_COUNT).map(completion_tag).collect();
    assert_eq!(tags, expected);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn process_runs_workers_concurrently() -> Result<()> {
    let app = test_app(&[])?;
    let result: ProcessResult = get_json(&app, "/process").await?;
    let delay_ms = WORKER_DELAY.as_secs_f64() * 1000.0;
    assert!(result.processing_time_ms >= delay_ms);
    // serialized workers would need WORKER_COUNT times the delay
    assert!(
        result.processing_time_ms < delay_ms * (WORKER_COUNT as f64 - 0.5),
        "took {}",
        result.processing_time
    );
    assert!(result.processing_time.ends_with("ms"));
    Ok(())
}

#[tokio::test]
async fn status_reads_runtime_counters() -> Result<()> {
    let app = test_app(&[("ORCHESTRATOR", "Scheduler")])?;
    let first: RuntimeStatus = get_json(&app, "/status").await?;
    let second: RuntimeStatus = get_json(&app, "/status").await?;
    assert_eq!(first.status, "healthy");
    assert_eq!(first.orchestrated_by, "Scheduler");
    assert!(second.gc_runs >= first.gc_runs);
    assert!(second.uptime_seconds >= first.uptime_seconds);
    assert!(second.timestamp >= first.timestamp);
    assert!(first.worker_threads >= 1);
    Ok(())
}

#[tokio::test]
async fn status_has_all_wire_fields() -> Result<()> {
    let app = test_app(&[])?;
    let raw: serde_json::Value = get_json(&app, "/status").await?;
    for field in [
        "service",
        "status",
        "uptime",
        "active_units",
        "memory_usage_mb",
        "gc_runs",
        "runtime_version",
        "orchestrated_by",
    ] {
        assert!(raw.get(field).is_some(), "missing {}", field);
    }
    assert!(raw["memory_usage_mb"].as_u64().is_some());
    Ok(())
}

#[tokio::test]
async fn root_lists_endpoints_on_default_port() -> Result<()> {
    let app = test_app(&[])?;
    let root: RootInfo = get_json(&app, "/").await?;
    assert_eq!(root.port, 8001);
    assert_eq!(root.available_endpoints, ["/health", "/process", "/status"]);
    assert_eq!(root.service, "status-sim");
    Ok(())
}

#[tokio::test]
async fn options_short_circuits_with_cors_headers() -> Result<()> {
    let app = test_app(&[])?;
    for uri in ["/health", "/process", "/status", "/"] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri(uri)
                    .body(Body::empty())?,
            )
            .await?;
        assert_eq!(response.status(), StatusCode::OK, "OPTIONS {}", uri);
        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(
            headers["access-control-allow-methods"],
            "GET, POST, OPTIONS"
        );
        assert_eq!(headers["access-control-allow-headers"], "Content-Type");
        let body =
            axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        assert!(body.is_empty());
    }
    Ok(())
}

#[tokio::test]
async fn unknown_path_is_not_found() -> Result<()> {
    let app = test_app(&[])?;
    let response = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn bind_failure_is_fatal() -> Result<()> {
    let taken = tokio::net::TcpListener::bind(("0.0.0.0", 0)).await?;
    let port = taken.local_addr()?.port();
    let mut env = HashMap::new();
    env.insert("GO_PORT".to_string(), port.to_string());
    let config = Config::init_from_hashmap(&env)?;
    match status_sim::start_server(config).await {
        Err(ServiceError::Bind { port: p, .. }) => assert_eq!(p, port),
        other => panic!("expected bind error, got {:?}", other),
    }
    Ok(())
}
