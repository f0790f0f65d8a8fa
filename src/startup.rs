//! Application startup and lifecycle management.

use crate::config::Config;
use crate::handlers;
use crate::middleware::request_id_middleware;
use axum::middleware::from_fn;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration.
    ///
    /// The listener is bound here so that port 0 resolves to a concrete
    /// ephemeral port before `run_until_stopped` is called.
    pub async fn build(config: Config) -> anyhow::Result<Self> {
        let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid listen address: {}", e))?;
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            anyhow::anyhow!("Failed to bind to address {}: {}", addr, e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            router: build_router(),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> anyhow::Result<()> {
        tracing::info!("Listening on port {}", self.port);
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }
}

/// Build the HTTP router. Four fixed GET routes; anything else falls
/// through to axum's default 404 handling.
pub fn build_router() -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/info", get(handlers::app_info))
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
}
