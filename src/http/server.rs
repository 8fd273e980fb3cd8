//! Listener binding and server lifecycle.

use std::future::Future;
use std::io;
use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{error, info};

use super::handlers::{SharedUseCase, router};

/// Errors raised while starting or running the HTTP server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listen address could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Requested listen address.
        addr: SocketAddr,
        /// Underlying socket error.
        #[source]
        source: io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

/// Binds a TCP listener on `addr`.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] when the address is unavailable.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serves the message API on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns [`ServerError::Serve`] when accepting or serving connections
/// fails.
pub async fn serve<F>(
    listener: TcpListener,
    use_case: SharedUseCase,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr().map_err(ServerError::Serve)?;
    info!(%local_addr, "message API listening");

    axum::serve(listener, router(use_case))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)?;

    info!("message API stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl-C.
///
/// If the signal handler cannot be installed the future never resolves, so
/// the server keeps running until killed.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(err) => {
            error!(error = %err, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    }
}
