use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use crate::context::ServiceContext;
use crate::error::ServiceError;
use crate::model::{HealthStatus, ProcessResult, RootInfo, RuntimeStatus};
use crate::runtime;
use crate::worker::{WORKER_COUNT, WORKER_DELAY, fan_out};

pub const ENDPOINTS: [&str; 3] = ["/health", "/process", "/status"];

pub async fn health(
    State(ctx): State<Arc<ServiceContext>>,
) -> Json<HealthStatus> {
    let uptime = ctx.uptime();
    Json(HealthStatus {
        service: ctx.service_name().to_string(),
        status: "running".to_string(),
        message: format!(
            "Rust concurrency engine active - Orchestrated by {}",
            ctx.orchestrator()
        ),
        port: ctx.port(),
        runtime_version: runtime::RUNTIME_VERSION.to_string(),
        uptime: runtime::format_uptime(uptime),
        uptime_seconds: uptime.as_secs_f64(),
    })
}

pub async fn process(
    State(ctx): State<Arc<ServiceContext>>,
) -> Result<Json<ProcessResult>, ServiceError> {
    let report = fan_out(WORKER_COUNT, WORKER_DELAY).await?;
    Ok(Json(ProcessResult {
        service: ctx.service_name().to_string(),
        action: "concurrent_processing".to_string(),
        active_units: runtime::active_units(),
        workers: WORKER_COUNT,
        result: "Rust concurrent processing completed successfully"
            .to_string(),
        processing_time: format!("{:?}", report.elapsed),
        processing_time_ms: report.elapsed.as_secs_f64() * 1000.0,
        data: report.tags,
    }))
}

pub async fn status(
    State(ctx): State<Arc<ServiceContext>>,
) -> Json<RuntimeStatus> {
    let uptime = ctx.uptime();
    Json(RuntimeStatus {
        service: ctx.service_name().to_string(),
        status: "healthy".to_string(),
        uptime: runtime::format_uptime(uptime),
        uptime_seconds: uptime.as_secs_f64(),
        active_units: runtime::active_units(),
        worker_threads: runtime::worker_threads(),
        memory_usage_mb: runtime::memory_usage_mb(),
        gc_runs: runtime::gc_runs(),
        runtime_version: runtime::RUNTIME_VERSION.to_string(),
        orchestrated_by: ctx.orchestrator().to_string(),
        timestamp: chrono::Utc::now(),
    })
}

pub async fn root(State(ctx): State<Arc<ServiceContext>>) -> Json<RootInfo> {
    Json(RootInfo {
        service: ctx.service_name().to_string(),
        message: format!(
            "Rust service running under {} orchestrator",
            ctx.orchestrator()
        ),
        available_endpoints: ENDPOINTS
            .iter()
            .map(|e| e.to_string())
            .collect(),
        port: ctx.port(),
        orchestrated_by: ctx.orchestrator().to_string(),
    })
}
