use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::error::ServiceError;

#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub log_level: String,
    pub json_format: bool,
}

impl TracingConfig {
    /// Reads `RUST_LOG` (default `info`) and `LOG_FORMAT` (`json` or
    /// `structured` for JSON lines, anything else is plain text).
    pub fn from_env() -> Self {
        let log_level =
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let json_format =
            is_json_format(std::env::var("LOG_FORMAT").ok().as_deref());
        Self {
            log_level,
            json_format,
        }
    }
}

fn is_json_format(log_format: Option<&str>) -> bool {
    match log_format.map(|s| s.to_ascii_lowercase()) {
        Some(ref v) if v == "json" || v == "structured" => true,
        _ => false,
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_format: false,
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over `log_level` when set.
pub fn setup_tracing(config: TracingConfig) -> Result<(), ServiceError> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_file(true)
        .with_line_number(true);

    let fmt_layer = if config.json_format {
        fmt_layer.json().boxed()
    } else {
        fmt_layer.boxed()
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ServiceError::Tracing(e.to_string()))
}
