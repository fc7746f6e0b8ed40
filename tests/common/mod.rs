#![allow(dead_code)]

use ai_search_roi::application::services::CalculatorService;
use ai_search_roi::state::AppState;
use ai_search_roi::web;
use ai_search_roi::web::handlers::{health_handler, not_found_handler};
use axum::{Router, routing::get};
use axum_test::TestServer;
use std::sync::Arc;

/// A plausible website that passes validation.
pub const SITE: &str = "acme.com";

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(CalculatorService::new()), "https://example.test/book")
}

/// Full page router without rate limiting (no peer address under the test transport).
pub fn create_test_app(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::page_routes())
        .merge(web::routes::calculate_routes())
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
        .with_state(state)
}

pub fn create_test_server() -> TestServer {
    TestServer::new(create_test_app(create_test_state())).unwrap()
}

/// The default CRM preset with an invisible brand, as the form would post it.
pub fn crm_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("website", SITE),
        ("industry", "CRM / Sales Software"),
        ("traffic", "45000"),
        ("cpc", "12.5"),
        ("cpl", "180"),
        ("conversion", "3.2"),
        ("ai_shift", "32"),
        ("mention_rate", "0"),
    ]
}
