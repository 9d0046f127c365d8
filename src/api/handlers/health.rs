//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "pricing": {
///       "status": "ok",
///       "message": "8 locations, base 20000 ILS/sqm"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let pricing_check = check_pricing(&state);

    let all_healthy = pricing_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            pricing: pricing_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the pricing parameters are usable.
fn check_pricing(state: &AppState) -> CheckStatus {
    let params = state.pricing_service.params();

    if params.locations.is_empty() {
        CheckStatus {
            status: "error".to_string(),
            message: Some("No locations configured".to_string()),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!(
                "{} locations, base {} ILS/sqm",
                params.locations.len(),
                params.base_price_per_sqm
            )),
        }
    }
}
