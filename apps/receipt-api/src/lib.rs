//! # Receipt API
//!
//! HTTP server that scores receipts and serves their points.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Receipt API                                    │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Router (axum)                                                   │  │
//! │  │  TraceLayer ─► TimeoutLayer ─► handlers (routes.rs)              │  │
//! │  └───────────────────────────────┬──────────────────────────────────┘  │
//! │                                  │                                      │
//! │  ┌───────────────────────────────▼──────────────────────────────────┐  │
//! │  │  ReceiptService                                                  │  │
//! │  │  • process_receipt: validate → score → store.put                 │  │
//! │  │  • get_points:      store.get                                    │  │
//! │  └───────────────────────────────┬──────────────────────────────────┘  │
//! │                                  │                                      │
//! │  ┌───────────────────────────────▼──────────────────────────────────┐  │
//! │  │  InMemoryPointsStore (RwLock<HashMap<Uuid, Points>>)             │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `PORT` - HTTP port (default: 8080)
//! - `BIND_ADDRESS` - Interface to bind (default: 0.0.0.0)
//! - `REQUEST_TIMEOUT_SECS` - Per-request deadline (default: 30)
//! - `SHUTDOWN_GRACE_SECS` - Drain deadline after a shutdown signal (default: 30)
//! - `LOG_LEVEL` - Log filter when `RUST_LOG` is unset (default: info)

pub mod config;
pub mod error;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;
pub use services::ReceiptService;

/// Shared application state.
#[derive(Debug)]
pub struct AppState {
    pub receipts: ReceiptService,
    pub config: ApiConfig,
}

impl AppState {
    /// State with an empty in-memory store.
    pub fn new(config: ApiConfig) -> Self {
        AppState {
            receipts: ReceiptService::in_memory(),
            config,
        }
    }
}

/// Builds the HTTP router.
pub fn router(state: Arc<AppState>) -> Router {
    let timeout = state.config.request_timeout;

    Router::new()
        .route("/receipts/process", post(routes::process_receipt))
        .route("/receipts/:id/points", get(routes::get_points))
        .route("/health", get(routes::health))
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
