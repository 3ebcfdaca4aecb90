//! HTTP server setup.
//!
//! # Responsibilities
//! - Build the Axum router with the dispatcher as the root handler
//! - Wire up middleware (read timeout, request ID, tracing)
//! - Bind to the configured address and serve until the process exits
//!
//! # Design Decisions
//! - The handler registry is moved into the server behind an `Arc` and
//!   never written after startup; dispatch is lock-free
//! - Bind failure is fatal: it is returned to the caller, which exits
//! - No graceful shutdown hook; process termination tears the server down

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::response::Response;
use axum::routing::any;
use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::dispatch::HandlerRegistry;
use crate::http::request::RequestIdLayer;

/// Errors from starting or running the server.
#[derive(Debug, Error)]
pub enum ServeError {
    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    /// The server failed while serving.
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// State injected into the dispatch handler.
#[derive(Clone)]
struct AppState {
    registry: Arc<HandlerRegistry>,
}

/// The API server: a dispatch table behind an HTTP listener.
pub struct ApiServer {
    router: Router,
    config: ServerConfig,
}

impl ApiServer {
    /// Build a server from a configuration and a populated registry.
    ///
    /// The registry becomes read-only here; every inbound request is
    /// resolved against it by the catch-all dispatch route.
    pub fn new(config: ServerConfig, registry: HandlerRegistry) -> Self {
        let state = AppState {
            registry: Arc::new(registry),
        };

        // The read timeout bounds how long a client may take to finish a
        // request, mitigating keep-alive abuse.
        let router = Router::new()
            .route("/", any(dispatch_request))
            .route("/{*path}", any(dispatch_request))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.read_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http());

        Self { router, config }
    }

    /// Run the server on an already-bound listener. Blocks until the
    /// process is terminated or the listener fails.
    pub async fn run(self, listener: TcpListener) -> Result<(), ServeError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            read_timeout_secs = self.config.timeouts.read_secs,
            "HTTP server starting"
        );

        axum::serve(listener, self.router).await?;
        Ok(())
    }

    /// Bind the configured address and serve forever.
    pub async fn bind_and_run(self) -> Result<(), ServeError> {
        let addr = self.config.listener.bind_address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServeError::Bind {
                addr: addr.clone(),
                source,
            })?;
        self.run(listener).await
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Root handler: every request funnels through the registry.
async fn dispatch_request(State(state): State<AppState>, request: Request<Body>) -> Response {
    state.registry.dispatch(request).await
}
