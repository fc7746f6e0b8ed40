//! Calculator page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    calculate_handler, details_query_handler, details_submit_handler, landing_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Wizard page routes.
///
/// # Endpoints
///
/// - `GET  /`         - Landing page with website entry
/// - `POST /details`  - Accept website, render prefilled details form
/// - `GET  /details`  - Re-render details form (benchmark change, adjust link)
pub fn page_routes() -> Router<AppState> {
    Router::new().route("/", get(landing_handler)).route(
        "/details",
        get(details_query_handler).post(details_submit_handler),
    )
}

/// Calculation route, rate limited separately from page views.
///
/// # Endpoints
///
/// - `POST /calculate` - Run the engine and render the results page
pub fn calculate_routes() -> Router<AppState> {
    Router::new().route("/calculate", post(calculate_handler))
}
