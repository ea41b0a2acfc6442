//! Quickstore - A small in-memory key-value and queue store
//!
//! Binary entry point serving the JSON command API.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tokio::sync::watch;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quickstore::{api::create_router, spawn_reaper, AppState, Config, Db};

/// Main entry point for the Quickstore server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the store
/// 4. Start the background expiry reaper
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. On SIGINT/SIGTERM, stop the reaper and shut down gracefully
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quickstore=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Quickstore server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, reaper_interval={}ms",
        config.server_port, config.reaper_interval_ms
    );

    let db = Db::new();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let reaper_handle = spawn_reaper(db.clone(), config.reaper_interval(), shutdown_rx);
    info!("Expiry reaper started");

    let app = create_router(AppState::new(db));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    // Stop the reaper between removals and wait for it to finish
    if shutdown_tx.send(true).is_err() {
        warn!("Expiry reaper already stopped");
    }
    if let Err(err) = reaper_handle.await {
        warn!("Expiry reaper ended abnormally: {}", err);
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
