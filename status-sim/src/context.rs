use std::time::{Duration, Instant};

use crate::conf::Config;

/// Per-process state handed to every handler. Immutable after startup.
#[derive(Debug)]
pub struct ServiceContext {
    pub config: Config,
    started_at: Instant,
}

impl ServiceContext {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            started_at: Instant::now(),
        }
    }

    pub fn service_name(&self) -> &str {
        &self.config.service_name
    }

    pub fn port(&self) -> u16 {
        self.config.http_port
    }

    pub fn orchestrator(&self) -> &str {
        &self.config.orchestrator
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
