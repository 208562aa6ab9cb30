//! HTTP server startup and graceful shutdown.
//!
//! Plain HTTP only; TLS is the ingress proxy's job in the expected container
//! deployment. Shutdown drains on SIGTERM (orchestrator stop) and Ctrl+C.

use std::net::SocketAddr;

use axum::Router;

use crate::config::AppConfig;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address {addr}: {source}")]
    Addr {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("Failed to bind server: {0}")]
    Bind(std::io::Error),

    #[error("Server error: {0}")]
    Serve(std::io::Error),
}

/// Start the HTTP server based on configuration.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr_str = format!("{}:{}", config.http.host, config.http.port);
    let addr: SocketAddr = addr_str.parse().map_err(|source| ServerError::Addr {
        addr: addr_str.clone(),
        source,
    })?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(ServerError::Bind)?;
    tracing::info!("Starting server at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

/// Resolves when SIGTERM or Ctrl+C is received.
///
/// Orchestrators send SIGTERM before killing the container; draining in-flight
/// probes keeps their logs clean.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
