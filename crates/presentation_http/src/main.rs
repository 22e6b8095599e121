//! Haven HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::time::Duration;

use infrastructure::{AppConfig, LogFormat, init_tracing};
use presentation_http::{create_app, state::AppState};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};

const DEFAULT_LOG_FILTER: &str = "haven_server=debug,presentation_http=debug,tower_http=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging comes up before the load error is reported
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    let log_format = config.server.log_format.parse::<LogFormat>();
    init_tracing(
        log_format.as_ref().copied().unwrap_or_default(),
        DEFAULT_LOG_FILTER,
    )?;

    info!("Haven v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = &log_format {
        warn!(error = %e, "Falling back to text logs");
    }
    if let Some(e) = load_error {
        warn!("Failed to load config, using defaults: {}", e);
    }

    info!(
        host = %config.server.host,
        port = %config.server.port,
        inference_url = %config.inference.base_url,
        model = %config.inference.model,
        "Configuration loaded"
    );

    let addr = config.server.bind_addr();
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);
    let app = create_app(AppState::from_config(config)?);

    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    info!("API docs: http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("Waiting up to {:?} for connections to close...", timeout);
}
