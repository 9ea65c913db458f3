mod conf;
mod context;
mod error;
mod handler;
pub mod model;
pub mod runtime;
mod telemetry;
pub mod worker;

pub use conf::Config;
pub use context::ServiceContext;
pub use error::ServiceError;
pub use handler::{ENDPOINTS, build_router};
pub use telemetry::{TracingConfig, setup_tracing};

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Binds `0.0.0.0:<http_port>` and serves until Ctrl-C or SIGTERM.
/// A bind failure is returned to the caller, which treats it as fatal.
pub async fn start_server(config: Config) -> Result<(), ServiceError> {
    let ctx = Arc::new(ServiceContext::new(config));
    print_banner(&ctx);

    let port = ctx.port();
    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .map_err(|source| ServiceError::Bind { port, source })?;
    info!("start server on port {}", port);
    axum::serve(listener, build_router(ctx))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

fn print_banner(ctx: &ServiceContext) {
    println!("{} starting on :{}", ctx.service_name(), ctx.port());
    println!("Orchestrated by: {}", ctx.orchestrator());
    println!("Available endpoints: {}", ENDPOINTS.join(", "));
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(
            tokio::signal::unix::SignalKind::terminate(),
        ) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
