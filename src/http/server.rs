//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the fetch handler
//! - Wire up middleware (request ID, tracing, CORS, timeout)
//! - Serve on a listener until the shutdown signal fires

use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, http::Request, routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::FetchProxyConfig;
use crate::fetch::FetchService;
use crate::http::handler::fetch_html;
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::security::cors_layer;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<FetchService>,
}

/// HTTP server for the fetch proxy.
pub struct HttpServer {
    router: Router,
    config: FetchProxyConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: FetchProxyConfig) -> Self {
        let state = AppState {
            service: Arc::new(FetchService::new(config.upstream.clone())),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Outermost first: request ID, propagation, trace, CORS, timeout.
    #[allow(deprecated)]
    fn build_router(config: &FetchProxyConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/", get(fetch_html))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)));

        if let Some(cors) = cors_layer(&config.cors) {
            router = router.layer(cors);
        }

        router
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id(request),
                    )
                }),
            )
            .layer(propagate_request_id_layer())
            .layer(set_request_id_layer())
    }

    /// The fully layered router, for serving elsewhere or driving in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            request_timeout_secs = self.config.timeouts.request_secs,
            cors = self.config.cors.enabled,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &FetchProxyConfig {
        &self.config
    }
}
