//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::state::AppState;
use crate::web::dto::health::{CheckStatus, HealthChecks, HealthResponse};

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: The benchmark catalog is empty
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "catalog": {
///       "status": "ok",
///       "message": "10 benchmark presets"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let catalog_check = check_catalog(&state);
    let healthy = catalog_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            catalog: catalog_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that benchmark presets are available for prefill.
fn check_catalog(state: &AppState) -> CheckStatus {
    let count = state.calculator.presets().len();

    if count == 0 {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Benchmark catalog is empty".to_string()),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{count} benchmark presets")),
        }
    }
}
