use axum::response::IntoResponse;
use http::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum ServiceError {
    #[error("Config error: {0}")]
    Config(#[from] envconfig::Error),
    #[error("Cannot bind port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: std::io::Error,
    },
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
    #[error("Tracing setup error: {0}")]
    Tracing(String),
    #[error("Fan-in incomplete: {received} of {expected} workers reported")]
    FanIn { expected: usize, received: usize },
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
