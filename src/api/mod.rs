//! HTTP API module for the health and version endpoints.

pub mod handlers;
pub mod routes;

pub use routes::create_router;

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;

/// Bind the configured address and serve requests until the process exits.
///
/// Bind failures (port already taken, bad address) propagate to the caller.
pub async fn serve(config: &Config) -> crate::Result<()> {
    let addr: SocketAddr = config.bind_addr().parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, create_router()).await?;
    Ok(())
}
