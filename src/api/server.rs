//! Listener binding and serve loop.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::error::Result;

use super::routes::create_router;

/// Bind the configured port and serve the API.
///
/// Runs until the process terminates; a failed bind (e.g. port already
/// in use) propagates as an error out of startup.
pub async fn serve(config: &Config) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("Server is running on port {}", config.port);

    let router = create_router();
    axum::serve(listener, router).await?;

    Ok(())
}
