use envconfig::Envconfig;

#[derive(Envconfig, Clone, Debug)]
pub struct Config {
    #[envconfig(from = "GO_PORT", default = "8001")]
    pub http_port: u16,
    /// Reported as `service` in every payload.
    #[envconfig(from = "SERVICE_NAME", default = "status-sim")]
    pub service_name: String,
    /// Cosmetic label only; nothing is ever sent to the orchestrator.
    #[envconfig(from = "ORCHESTRATOR", default = "JavaScript")]
    pub orchestrator: String,
}
