//! HTTP status endpoints for the test service.
//!
//! Serves a timestamped health message and a static Keycloak sync status
//! under `/api/test`, with structured logging (tracing) and Prometheus metrics.

pub mod clock;
pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use clock::{Clock, MonotonicClock, SystemClock};

/// Shared application state accessible from all handlers.
#[derive(Clone)]
pub struct AppState {
    pub clock: Arc<dyn Clock>,
}

/// Creates the default application state backed by the system clock.
pub fn create_default_state() -> AppState {
    AppState {
        clock: Arc::new(MonotonicClock::new(SystemClock)),
    }
}

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: AppState, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    let test_routes = Router::new()
        .route("/health", get(routes::health::check))
        .route("/keycloak-sync", get(routes::keycloak::status));

    Router::new()
        .nest("/api/test", test_routes)
        .with_state(state)
        .merge(metrics_router)
        .fallback(routes::not_found)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
}
