//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the described Axum router from a route tree
//! - Wire up middleware (tracing, request ID, timeout)
//! - Bind server to listener
//! - Shut down gracefully on signal

use axum::{http::header::InvalidHeaderValue, Router};
use std::future::Future;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::routing::{DescribedRouter, RouterError};

/// Errors raised while assembling the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid route tree: {0}")]
    Router(#[from] RouterError),

    #[error("invalid description content type: {0}")]
    ContentType(#[from] InvalidHeaderValue),
}

/// HTTP server exposing a self-describing route tree.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server serving `routes` with the given configuration.
    pub fn new(config: ServerConfig, routes: DescribedRouter) -> Result<Self, ServerError> {
        let options = config.describe.to_options()?;
        let described = routes.into_router_with(options)?;
        let router = Self::build_router(&config, described);
        Ok(Self { router, config })
    }

    /// Wrap the described router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, described: Router) -> Router {
        described
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until Ctrl+C.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        self.run_until(listener, shutdown_signal()).await
    }

    /// Run the server until `signal` completes.
    pub async fn run_until<F>(self, listener: TcpListener, signal: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(signal)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a handle to the fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
