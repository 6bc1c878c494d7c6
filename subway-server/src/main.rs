use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use subway_server::config::ServerConfig;
use subway_server::store::MemoryStore;
use subway_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let state = AppState::new(MemoryStore::new());
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %config.bind_addr, "subway server listening");
    info!("  GET    /health");
    info!("  GET    /stations, POST /stations, DELETE /stations/:id");
    info!("  GET    /lines, POST /lines");
    info!("  GET    /lines/:id, PUT /lines/:id, DELETE /lines/:id");
    info!("  POST   /lines/:id/sections, DELETE /lines/:id/sections?station_id=");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }

    info!("shut down");
    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
