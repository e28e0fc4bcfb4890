//! HTTP server setup.
//!
//! # Responsibilities
//! - Wrap an installed route table with the middleware stack
//!   (tracing, request timeout, body limit)
//! - Bind the server to a listener
//! - Stop on Ctrl+C or a shutdown broadcast

use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::lifecycle::signals;

/// HTTP server for derived controller routes.
pub struct RouteServer {
    router: Router,
    config: ServerConfig,
}

impl RouteServer {
    /// Create a server around an installed router.
    pub fn new(router: Router, config: ServerConfig) -> Self {
        let router = Self::build_router(router, &config);
        Self { router, config }
    }

    /// Add the middleware layers.
    #[allow(deprecated)]
    fn build_router(router: Router, config: &ServerConfig) -> Router {
        router
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
            .layer(RequestBodyLimitLayer::new(config.max_body_size))
            .layer(TraceLayer::new_for_http())
    }

    /// The router with middleware applied.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Serve until Ctrl+C or until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = signals::ctrl_c() => {}
                    _ = shutdown.recv() => {
                        tracing::info!("Shutdown requested");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
