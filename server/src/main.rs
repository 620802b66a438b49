mod config;
mod devices;
mod routes;
mod state;

use std::sync::Arc;

use crate::config::{ConfigError, ServerConfig};
use crate::devices::simulated::SimulatedDriver;
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: std::net::SocketAddr, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let driver = SimulatedDriver::new(&config.cameras, &config.faulty_cameras);
    let state = AppState::new(Arc::new(driver), config.frame_interval());

    let app = routes::app(state.clone(), config.static_dir.as_deref());
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(
        %addr,
        cameras = ?config.cameras,
        faulty = ?config.faulty_cameras,
        fps = config.stream_fps,
        "camera server listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(ServerError::Serve)
}

/// Resolve on Ctrl-C after releasing every device, which also ends open
/// streams so graceful shutdown can complete.
async fn shutdown_signal(state: AppState) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler unavailable");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
    state.release_all().await;
}
