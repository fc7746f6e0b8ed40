//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`           - Landing page (public)
//! - `GET|POST /details` - Details form
//! - `POST /calculate`  - Results page
//! - `GET  /health`     - Health check
//! - `/static/*`        - Stylesheet and assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::state::AppState;
use crate::web;
use crate::web::handlers::{health_handler, not_found_handler};
use crate::web::middleware::rate_limit::{self, CALCULATE_QUOTA, PAGE_QUOTA, Quota};
use crate::web::middleware::tracing;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

fn limited(router: Router<AppState>, quota: Quota, behind_proxy: bool) -> Router<AppState> {
    if behind_proxy {
        router.layer(rate_limit::proxied_layer(quota))
    } else {
        router.layer(rate_limit::layer(quota))
    }
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/static`
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, static_dir: &str, behind_proxy: bool) -> NormalizePath<Router> {
    let pages = limited(web::routes::page_routes(), PAGE_QUOTA, behind_proxy);
    let calculate = limited(web::routes::calculate_routes(), CALCULATE_QUOTA, behind_proxy);

    let router = Router::new()
        .merge(pages)
        .merge(calculate)
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
