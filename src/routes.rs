//! Top-level router combining pages and the JSON API.
//!
//! # Route Structure
//!
//! - `GET  /`             - Redirect to the dashboard
//! - `GET  /health`       - Health check: record store and snapshot
//! - `/dashboard/*`       - Server-rendered pages
//! - `/api/*`             - JSON API (rate limited)
//! - `/static/*`          - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on `/api`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::response::Redirect;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Routes without the rate limiter or path normalization.
///
/// Used directly by tests, which do not provide peer addresses.
pub fn base_router(state: AppState, static_dir: &str) -> Router {
    build(state, static_dir, api::routes::routes())
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/static`
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    let api_router = api::routes::routes().layer(rate_limit::layer());
    let router = build(state, static_dir, api_router);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

fn build(state: AppState, static_dir: &str, api_router: Router<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/dashboard") }))
        .route("/health", get(health_handler))
        .nest("/dashboard", web::routes::routes())
        .nest("/api", api_router)
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer())
}
