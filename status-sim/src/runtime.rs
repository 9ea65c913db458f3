use std::time::Duration;

/// Compiler that built this binary, e.g. `rustc 1.85.0 (4d91de4e4 2025-02-17)`.
pub const RUNTIME_VERSION: &str = env!("RUSTC_VERSION");

/// Tasks currently alive on the tokio runtime driving the caller.
pub fn active_units() -> usize {
    tokio::runtime::Handle::try_current()
        .map(|h| h.metrics().num_alive_tasks())
        .unwrap_or(0)
}

pub fn worker_threads() -> usize {
    tokio::runtime::Handle::try_current()
        .map(|h| h.metrics().num_workers())
        .unwrap_or(0)
}

/// Rust has no collector, so there are no cycles to count.
pub fn gc_runs() -> u64 {
    0
}

/// Resident set size in whole megabytes. 0 when the platform does not
/// expose it.
pub fn memory_usage_mb() -> u64 {
    std::fs::read_to_string("/proc/self/status")
        .ok()
        .and_then(|status| parse_vm_rss_kb(&status))
        .map(|kb| kb / 1024)
        .unwrap_or(0)
}

fn parse_vm_rss_kb(status: &str) -> Option<u64> {
    status
        .lines()
        .find_map(|line| line.strip_prefix("VmRSS:"))
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|kb| kb.parse().ok())
}

/// Rounds to the nearest second and renders as `1h2m3s`, dropping leading
/// zero units.
pub fn format_uptime(uptime: Duration) -> String {
    let total = (uptime + Duration::from_millis(500)).as_secs();
    let (h, m, s) = (total / 3600, (total / 60) % 60, total % 60);
    if h > 0 {
        format!("{}h{}m{}s", h, m, s)
    } else if m > 0 {
        format!("{}m{}s", m, s)
    } else {
        format!("{}s", s)
    }
}
