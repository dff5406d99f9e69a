//! HTTP API server for the realtime-app backend.
//!
//! Serves a static status endpoint at `/api` and user create/list endpoints
//! at `/api/users`, with request tracing and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use user_store::UserStore;

use routes::users::AppState;

/// Creates the Axum application router with all routes and shared state.
///
/// Cross-origin requests are accepted from any origin on the user routes.
pub fn create_app<S: UserStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let users_router = Router::new()
        .route(
            "/api/users",
            get(routes::users::list::<S>).post(routes::users::create::<S>),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/api", get(routes::status::get))
        .merge(users_router)
        .merge(metrics_router)
        .layer(TraceLayer::new_for_http())
}

/// Wraps a user store in shared application state.
pub fn create_state<S: UserStore + 'static>(store: S) -> Arc<AppState<S>> {
    Arc::new(AppState::new(store))
}
