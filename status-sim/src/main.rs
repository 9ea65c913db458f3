use envconfig::Envconfig;
use status_sim::{
    Config, ServiceError, TracingConfig, setup_tracing, start_server,
};

fn main() {
    if let Err(e) = setup_tracing(TracingConfig::from_env()) {
        eprintln!("{}", e);
    }
    let cpus = num_cpus::get();
    let worker_threads = std::cmp::max(1, cpus);
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to build tokio runtime: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = runtime.block_on(start()) {
        tracing::error!("Error starting server: {}", e);
        std::process::exit(1);
    }
}

async fn start() -> Result<(), ServiceError> {
    let conf = Config::init_from_env()?;
    start_server(conf).await
}
