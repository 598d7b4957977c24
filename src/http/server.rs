//! HTTP server.
//!
//! Binds the listener up front so callers can learn the real port, then
//! hands it to `axum::serve`. Lookups for different requests never share
//! state, so there is no locking here.

use super::handler::create_router;
use crate::dns::Resolve;
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;

/// Errors that stop the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("failed to read local address: {0}")]
    LocalAddr(#[source] io::Error),
    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

/// The resolve service: a resolver plus the listener it answers on.
///
/// Constructed once at startup and consumed by [`ResolveServer::serve`].
pub struct ResolveServer {
    resolver: Arc<dyn Resolve>,
    listener: TcpListener,
    local_addr: SocketAddr,
}

impl ResolveServer {
    /// Bind `addr` and prepare to serve lookups through `resolver`.
    pub async fn bind(addr: SocketAddr, resolver: Arc<dyn Resolve>) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        let local_addr = listener.local_addr().map_err(ServerError::LocalAddr)?;

        Ok(Self {
            resolver,
            listener,
            local_addr,
        })
    }

    /// The address actually bound (useful when binding port 0).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve until `shutdown` completes.
    ///
    /// The listener closes as soon as `shutdown` fires; requests already in
    /// flight are allowed to finish.
    pub async fn serve<F>(self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!(
            addr = %self.local_addr,
            strategy = %self.resolver.strategy(),
            "resolve service listening"
        );

        axum::serve(self.listener, create_router(self.resolver))
            .with_graceful_shutdown(async move {
                shutdown.await;
                tracing::info!("shutdown signal received");
            })
            .await
            .map_err(ServerError::Serve)
    }
}
