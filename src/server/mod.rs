//! HTTP server startup.
//!
//! Plain HTTP only: the service runs behind whatever terminates TLS for the
//! admin console. Shuts down gracefully on SIGTERM/SIGINT.

mod shutdown;

use std::net::SocketAddr;

use axum::Router;

use crate::config::AppConfig;

pub use shutdown::shutdown_signal;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address {0}: {1}")]
    Address(String, std::net::AddrParseError),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Resolve the listen address from `http.host` and `http.port`.
pub fn listen_addr(config: &AppConfig) -> Result<SocketAddr, ServerError> {
    let raw = format!("{}:{}", config.http.host, config.http.port);
    raw.parse().map_err(|e| ServerError::Address(raw, e))
}

/// Bind and serve `app`. Blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = listen_addr(config)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Starting HTTP server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
