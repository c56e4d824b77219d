//! Axum-backed HTTP service.
//!
//! # Responsibilities
//! - Bind the configured address and serve an Axum router
//! - Drain in-flight connections on stop via graceful shutdown
//! - Report an unexpected server exit as a self-initiated stop request
//!
//! This is the hosted-service side of the [`Service`] contract; the
//! controller drives it, it never installs triggers of its own.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::routing::get;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::lifecycle::Service;

/// Errors from the HTTP service.
#[derive(Debug, Error)]
pub enum HttpServerError {
    /// Failed to bind the listener address.
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },
}

/// HTTP server hosting an Axum router.
pub struct HttpServer {
    bind_address: String,
    router: Router,
    drain: CancellationToken,
    exited: CancellationToken,
    serve_task: Option<JoinHandle<()>>,
    local_addr: Option<SocketAddr>,
}

impl HttpServer {
    /// Create a server that will bind `bind_address` on start.
    pub fn new(bind_address: impl Into<String>, router: Router) -> Self {
        Self {
            bind_address: bind_address.into(),
            router,
            drain: CancellationToken::new(),
            exited: CancellationToken::new(),
            serve_task: None,
            local_addr: None,
        }
    }

    /// The bound address, available once the server has started.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.local_addr
    }

    fn bind_error(&self, source: std::io::Error) -> HttpServerError {
        HttpServerError::Bind {
            address: self.bind_address.clone(),
            source,
        }
    }
}

impl Service for HttpServer {
    type Error = HttpServerError;

    async fn start(&mut self) -> Result<(), Self::Error> {
        let listener = TcpListener::bind(self.bind_address.as_str())
            .await
            .map_err(|source| self.bind_error(source))?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| self.bind_error(source))?;
        self.local_addr = Some(local_addr);

        tracing::info!(address = %local_addr, "HTTP server starting");

        let app = self.router.clone();
        let drain = self.drain.clone();
        let exited = self.exited.clone();
        self.serve_task = Some(tokio::spawn(async move {
            let shutdown = async move { drain.cancelled().await };
            if let Err(error) = axum::serve(listener, app)
                .with_graceful_shutdown(shutdown)
                .await
            {
                tracing::error!(error = %error, "HTTP server exited with error");
            }
            exited.cancel();
        }));
        Ok(())
    }

    async fn stop(&mut self, deadline: Duration) -> Result<(), Self::Error> {
        self.drain.cancel();
        if let Some(task) = self.serve_task.take() {
            tracing::debug!(
                timeout_secs = deadline.as_secs(),
                "Draining in-flight connections"
            );
            if let Err(error) = task.await {
                if !error.is_cancelled() {
                    tracing::error!(error = %error, "HTTP server task failed during stop");
                }
            }
            tracing::info!("HTTP server stopped");
        }
        Ok(())
    }

    async fn stop_requested(&mut self) {
        self.exited.cancelled().await;
    }

    fn bound_addresses(&self) -> Vec<String> {
        self.local_addr.iter().map(ToString::to_string).collect()
    }
}

/// Router used by the demo host binary.
pub fn demo_router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
}

async fn index() -> &'static str {
    "service host demo application\n"
}

async fn healthz() -> &'static str {
    "ok"
}
