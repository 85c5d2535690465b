//! # Minimart HTTP Server
//!
//! Transport layer for the cart/checkout core.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Load Configuration ───────────────────────────────────────────────► │
//! │     • PORT, MINIMART_DATA_FILE                                          │
//! │                                                                         │
//! │  3. Load State Document ──────────────────────────────────────────────► │
//! │     • missing file: seeded and persisted                                │
//! │     • corrupt file: logged, re-initialized from seed (explicit policy)  │
//! │                                                                         │
//! │  4. Serve ────────────────────────────────────────────────────────────► │
//! │     • axum router + permissive CORS, graceful shutdown on ctrl-c        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod routes;
mod state;

use std::net::SocketAddr;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use minimart_core::Catalog;
use minimart_store::{FileStore, StateDocument, StoreError};

use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Minimart server");

    let config = ServerConfig::load()?;
    info!(port = config.port, data_file = %config.data_file.display(), "Configuration loaded");

    let store = FileStore::new(&config.data_file);
    let document = load_or_recover(&store)?;
    info!(lines = document.cart.lines().len(), "State document ready");

    let state = AppState::new(Catalog::seed(), document, store);

    let app = routes::router()
        .layer(TraceLayer::new_for_http())
        // the API is consumed by a browser frontend on another origin
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Minimart backend running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Loads the state document, re-initializing from seed on corruption.
///
/// Re-initialization is this server's explicit recovery policy: the
/// corrupt document is logged and overwritten with the seed. I/O errors
/// are NOT recovered from; an unreadable medium fails startup.
fn load_or_recover(store: &FileStore) -> Result<StateDocument, StoreError> {
    match store.load() {
        Ok(doc) => Ok(doc),
        Err(StoreError::Corrupt { path, reason }) => {
            warn!(path = %path.display(), reason, "Corrupt state document, re-initializing from seed");
            let doc = StateDocument::seed();
            store.save(&doc)?;
            Ok(doc)
        }
        Err(e) => Err(e),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - show debug messages
/// - `RUST_LOG=minimart=trace` - trace for minimart crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,minimart=debug,tower_http=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Completes when the process receives ctrl-c.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
    } else {
        info!("Shutdown signal received");
    }
}
