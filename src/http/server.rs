//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with a single catch-all handler
//! - Wire up middleware (tracing, timeout, request ID, OPTIONS filter, CORS)
//! - Bind server to listener
//! - Dispatch request paths to the routing engine
//! - Observability (metrics, correlation IDs)

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::State,
    middleware,
    http::{HeaderMap, Method, Uri},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::api::ApiError;
use crate::config::ApiConfig;
use crate::http::middleware::reject_bare_options;
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::observability::metrics;
use crate::routing::Router as StockRouter;
use crate::stocks::StockRegistry;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<StockRouter>,
}

/// HTTP server for the stock API.
pub struct HttpServer {
    router: Router,
    stock_router: Arc<StockRouter>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ApiConfig) -> Self {
        let registry = Arc::new(StockRegistry::from_config(&config.stocks));
        let stock_router = Arc::new(StockRouter::new(registry));
        let state = AppState {
            router: stock_router.clone(),
        };

        let router = Self::build_router(&config, state);
        Self {
            router,
            stock_router,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ApiConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(dispatch_handler))
            .route("/", any(dispatch_handler))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(TraceLayer::new_for_http())
                    .layer(propagate_request_id_layer())
                    .layer(middleware::from_fn(reject_bare_options))
                    .layer(CorsLayer::permissive())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
    }

    /// The fully layered Axum router, for in-process serving.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
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
                let _ = shutdown.recv().await;
                tracing::info!("HTTP server draining");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The path router shared with the request handlers.
    pub fn stock_router(&self) -> &StockRouter {
        &self.stock_router
    }
}

/// Catch-all handler: filters methods, then hands the path to the stock router.
async fn dispatch_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let start_time = Instant::now();
    let request_id = request_id(&headers);
    let path = uri.path();

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %path,
        "Routing request"
    );

    let route_label = state
        .router
        .match_path(path)
        .map(|m| m.endpoint.label())
        .unwrap_or("none");

    let response = if method == Method::GET || method == Method::HEAD {
        state.router.route(path)
    } else {
        ApiError::MethodNotAllowed {
            method: method.to_string(),
        }
        .into()
    };

    if response.status.is_client_error() {
        tracing::info!(
            request_id = %request_id,
            path = %path,
            status = response.status.as_u16(),
            "Request rejected"
        );
    }

    metrics::record_request(
        method.as_str(),
        response.status.as_u16(),
        route_label,
        start_time,
    );

    response.into_response()
}
