//! Handlers for the market estimate endpoint.

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use validator::Validate;

use crate::api::dto::estimate::{EstimateRequest, EstimateResponse};
use crate::api::handlers::record_outcome;
use crate::error::AppError;
use crate::state::AppState;

/// Computes an estimate from a JSON body.
///
/// # Endpoint
///
/// `POST /api/estimate`
///
/// # Request Body
///
/// ```json
/// {
///   "location": "center",
///   "size_sqm": 80,
///   "floor": 3,
///   "building_age": 5,
///   "condition_factor": 1.0,
///   "market_adjustment": 0
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "location": "center",
///   "location_weight": 1.5,
///   "total_price": 2328000.0,
///   "components": [
///     { "label": "base", "value": 2400000.0 },
///     { "label": "floor", "value": 48000.0 },
///     { "label": "building_age", "value": -120000.0 },
///     { "label": "condition", "value": 0.0 },
///     { "label": "market_adjustment", "value": 0.0 }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request naming the field when a value is missing,
/// malformed or out of range.
pub async fn estimate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> Result<Json<EstimateResponse>, AppError> {
    let Json(payload) = payload.inspect_err(|_| record_outcome("estimate", "rejected"))?;
    compute(&state, payload).map(Json)
}

/// Computes an estimate from query parameters.
///
/// # Endpoint
///
/// `GET /api/estimate?location=center&size_sqm=80&floor=3&building_age=5`
///
/// Accepts the same fields as [`estimate_handler`] and returns the same body.
pub async fn estimate_query_handler(
    State(state): State<AppState>,
    query: Result<Query<EstimateRequest>, QueryRejection>,
) -> Result<Json<EstimateResponse>, AppError> {
    let Query(payload) = query.inspect_err(|_| record_outcome("estimate", "rejected"))?;
    compute(&state, payload).map(Json)
}

fn compute(state: &AppState, payload: EstimateRequest) -> Result<EstimateResponse, AppError> {
    payload
        .validate()
        .inspect_err(|_| record_outcome("estimate", "rejected"))?;

    let result = state
        .pricing_service
        .estimate(&payload.into())
        .inspect_err(|e| {
            tracing::debug!(field = e.field(), "Estimate rejected: {}", e);
            record_outcome("estimate", "rejected");
        })?;

    record_outcome("estimate", "ok");
    Ok(result.into())
}
