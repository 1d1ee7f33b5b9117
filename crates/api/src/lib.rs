//! HTTP API server with observability for the sales service.
//!
//! Provides REST endpoints for sale lifecycle operations and the user
//! subsystem, with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, patch, post};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain::{HttpUserDirectory, InMemoryUserDirectory, SalesService, UserDirectory};
use sale_store::{InMemorySaleStore, SaleStore};
use users::{InMemoryUserStore, UserService};

use routes::sales::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S, D>(state: Arc<AppState<S, D>>, metrics_handle: PrometheusHandle) -> Router
where
    S: SaleStore + 'static,
    D: UserDirectory + 'static,
{
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/sales", post(routes::sales::create::<S, D>))
        .route("/sales", get(routes::sales::search::<S, D>))
        .route("/sales/{id}", patch(routes::sales::update_status::<S, D>))
        .route("/users", post(routes::users::create::<S, D>))
        .route("/users/{id}", get(routes::users::get::<S, D>))
        .route("/users/{id}", patch(routes::users::update::<S, D>))
        .route("/users/{id}", delete(routes::users::remove::<S, D>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates application state backed by in-memory stores, checking user
/// existence against the user API at `user_api_url`.
pub fn create_default_state(
    user_api_url: impl Into<String>,
) -> Arc<AppState<InMemorySaleStore, HttpUserDirectory>> {
    let sales = SalesService::new(
        InMemorySaleStore::new(),
        HttpUserDirectory::new(user_api_url),
    );
    let users = UserService::new(InMemoryUserStore::new());
    Arc::new(AppState { sales, users })
}

/// Creates application state with an in-memory user directory.
///
/// Returns handles to the sale store and the directory so tests can seed
/// records and known users directly.
pub fn create_local_state() -> (
    Arc<AppState<InMemorySaleStore, InMemoryUserDirectory>>,
    InMemorySaleStore,
    InMemoryUserDirectory,
) {
    let store = InMemorySaleStore::new();
    let directory = InMemoryUserDirectory::new();
    let sales = SalesService::new(store.clone(), directory.clone());
    let users = UserService::new(InMemoryUserStore::new());
    let state = Arc::new(AppState { sales, users });
    (state, store, directory)
}
