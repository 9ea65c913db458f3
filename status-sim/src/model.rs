use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub service: String,
    pub status: String,
    pub message: String,
    pub port: u16,
    pub runtime_version: String,
    pub uptime: String,
    pub uptime_seconds: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResult {
    pub service: String,
    pub action: String,
    /// Live tasks observed right after the fan-in.
    pub active_units: usize,
    pub workers: usize,
    pub result: String,
    pub processing_time: String,
    pub processing_time_ms: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeStatus {
    pub service: String,
    pub status: String,
    pub uptime: String,
    pub uptime_seconds: f64,
    pub active_units: usize,
    pub worker_threads: usize,
    pub memory_usage_mb: u64,
    pub gc_runs: u64,
    pub runtime_version: String,
    pub orchestrated_by: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootInfo {
    pub service: String,
    pub message: String,
    pub available_endpoints: Vec<String>,
    pub port: u16,
    pub orchestrated_by: String,
}
