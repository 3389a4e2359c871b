//! # Receipt API
//!
//! HTTP server for receipt points.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Receipt API Server                               │
//! │                                                                         │
//! │  Client ───► HTTP (8080) ───► ReceiptService ───► InMemoryPointsStore  │
//! │                                                                         │
//! │  SIGINT / SIGTERM ───► stop accepting ───► drain (SHUTDOWN_GRACE_SECS) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::sync::watch;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use receipt_api::{router, ApiConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ApiConfig::load().context("failed to load configuration")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Receipt API server...");

    let addr = config.socket_addr();
    info!(
        %addr,
        request_timeout_secs = config.request_timeout.as_secs(),
        shutdown_grace_secs = config.shutdown_grace.as_secs(),
        "Configuration loaded"
    );

    let grace = config.shutdown_grace;
    let state = Arc::new(AppState::new(config));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "Listening");

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(enforce_shutdown_deadline(shutdown_rx, grace));

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = shutdown_tx.send(true);
        })
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(?e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(?e, "Failed to install SIGTERM handler");
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

    info!("Shutdown signal received, starting graceful shutdown...");
}

/// Exits the process if draining outlives `grace` once shutdown starts.
async fn enforce_shutdown_deadline(mut shutdown: watch::Receiver<bool>, grace: Duration) {
    let started = shutdown.wait_for(|started| *started).await.is_ok();
    if !started {
        return;
    }

    tokio::time::sleep(grace).await;
    error!(grace_secs = grace.as_secs(), "Graceful shutdown timed out, forcing exit");
    std::process::exit(1);
}
