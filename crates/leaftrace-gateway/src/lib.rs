//! Leaftrace Gateway
//!
//! HTTP facade over the mock ledger: one parameterized provenance route
//! plus a health check. Stateless apart from the shared ledger handle;
//! there is no session management, no authentication, and no persistence.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::GatewayConfig;
use handlers::{create_router, AppState};
use leaftrace_ledger::MockLedger;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Gateway error
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the Gateway HTTP server
///
/// Initializes tracing, builds the shared state around the mock ledger,
/// and serves until interrupted.
pub async fn start_server(config: GatewayConfig) -> Result<(), GatewayError> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Leaftrace Gateway");
    info!("Bind address: {}", config.bind_addr());
    info!("Simulated fetch delay: {} ms", config.fetch_delay_ms);

    let state = AppState {
        ledger: Arc::new(MockLedger::new()),
        fetch_delay: config.fetch_delay(),
    };

    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Gateway listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| GatewayError::Server(e.to_string()))?;

    Ok(())
}
