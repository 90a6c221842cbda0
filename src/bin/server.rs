//! TransferBuddy HTTP Server Binary
//!
//! Entry point for the REST API server. It initializes the repository, sets
//! up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the in-memory repository and seed catalog (default)
//! cargo run --bin transferbuddy-server --features "local-repo,http-server"
//!
//! # Run with the JSON-document repository
//! TRANSFERBUDDY_DATA_DIR=/var/lib/transferbuddy \
//!   cargo run --bin transferbuddy-server --features "file-repo,http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 5001)
//! - `REPOSITORY_TYPE`: `local` or `file` (default: inferred)
//! - `TRANSFERBUDDY_DATA_DIR`: plan data directory for the file backend
//! - `TRANSFERBUDDY_CATALOG`: catalog JSON file (seed catalog when unset)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use transferbuddy::db;
use transferbuddy::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting TransferBuddy HTTP Server");

    // Initialize the global repository once and reuse it across the app
    db::init_repository().map_err(|e| anyhow::anyhow!(e))?;
    let repository = std::sync::Arc::clone(db::get_repository()?);
    info!("Repository initialized successfully");

    let state = AppState::new(repository);
    let app = create_router(state);

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(5001);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
