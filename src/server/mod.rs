//! Server initialization and routing

use crate::api::{self, metrics::MetricsHandle};
use crate::auth::RequestAuthenticator;
use crate::config::Config;
use crate::middleware::{normalize_error_response, ObservabilityLayer};
use crate::repository::InMemoryCatalogRepository;
use crate::service::CatalogService;
use crate::state::HasServices;
use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService<InMemoryCatalogRepository>>,
    pub authenticator: RequestAuthenticator,
}

impl AppState {
    /// Wire the seeded in-memory catalog and the request authenticator.
    pub fn new(config: &Config) -> Result<Self> {
        let authenticator = RequestAuthenticator::new(&config.auth.hmac_secret)?;
        let catalog_repo = Arc::new(InMemoryCatalogRepository::new());

        Ok(Self {
            catalog_service: Arc::new(CatalogService::new(catalog_repo)),
            authenticator,
        })
    }
}

impl HasServices for AppState {
    type CatalogRepo = InMemoryCatalogRepository;

    fn catalog_service(&self) -> &CatalogService<Self::CatalogRepo> {
        &self.catalog_service
    }

    fn authenticator(&self) -> &RequestAuthenticator {
        &self.authenticator
    }
}

/// Start the HTTP server and serve until interrupted
pub async fn run(config: Config, prometheus_handle: Option<PrometheusHandle>) -> Result<()> {
    let http_addr = config.http_addr();
    let state = AppState::new(&config)?;
    info!("Catalog seeded");

    let app = build_router(state, prometheus_handle);

    let listener = TcpListener::bind(&http_addr).await?;
    info!("HTTP server started on {}", http_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Build the HTTP router with generic state type
///
/// Generic over the state so tests can drive the exact production routes
/// against their own `HasServices` implementation.
pub fn build_router<S: HasServices>(state: S, prometheus_handle: Option<PrometheusHandle>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let metrics_routes = Router::new()
        .route("/metrics", get(api::metrics::render))
        .with_state::<()>(MetricsHandle::new(prometheus_handle));

    Router::new()
        // Health endpoints
        .route("/health", get(api::health::health))
        .route("/ready", get(api::health::ready))
        // Books
        .route("/api/v1/books", get(api::book::list::<S>))
        // Genres
        .route(
            "/api/v1/genres",
            get(api::genre::list::<S>).post(api::genre::create::<S>),
        )
        .route("/api/v1/genres/{genreId}", get(api::genre::get::<S>))
        .route(
            "/api/v1/genres/{genreId}/books",
            get(api::book::list_in_genre::<S>).post(api::book::create::<S>),
        )
        .route(
            "/api/v1/genres/{genreId}/books/{bookId}",
            get(api::book::get::<S>).patch(api::book::update::<S>),
        )
        // Maintenance
        .route("/api/v1/reset", get(api::reset::reset::<S>))
        .fallback(api::route_not_found)
        .method_not_allowed_fallback(api::route_not_found)
        .with_state(state)
        .merge(metrics_routes)
        .layer(axum::middleware::from_fn(normalize_error_response))
        .layer(ObservabilityLayer)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
