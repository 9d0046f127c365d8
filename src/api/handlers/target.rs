//! Handler for the target price endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::target::{TargetRequest, TargetResponse};
use crate::api::handlers::record_outcome;
use crate::error::AppError;
use crate::state::AppState;

/// Computes the weighted-area target price.
///
/// # Endpoint
///
/// `POST /api/calculate`
///
/// # Request Body
///
/// ```json
/// {
///   "apartment_area": 100,
///   "balcony_area": 10,
///   "garden_area": 0,
///   "parking_spots": 1,
///   "base_price_per_sqm": 20000,
///   "current_price_per_sqm": 30000
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "weighted_area": 105.0,
///   "area_components": [{ "label": "apartment", "value": 100.0 }, ...],
///   "base_total_price": 2100000.0,
///   "current_total_price": 3150000.0,
///   "discounted_price": 1575000.0,
///   "price_difference": 1575000.0,
///   "final_price": 2100000.0,
///   "savings": 1050000.0,
///   "max_difference_exceeded": true
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request naming the field when a value is missing,
/// malformed or out of range.
pub async fn target_price_handler(
    State(state): State<AppState>,
    payload: Result<Json<TargetRequest>, JsonRejection>,
) -> Result<Json<TargetResponse>, AppError> {
    let Json(payload) = payload.inspect_err(|_| record_outcome("target", "rejected"))?;
    payload
        .validate()
        .inspect_err(|_| record_outcome("target", "rejected"))?;

    let result = state
        .pricing_service
        .target_price(&payload.into())
        .inspect_err(|e| {
            tracing::debug!(field = e.field(), "Target price rejected: {}", e);
            record_outcome("target", "rejected");
        })?;

    record_outcome("target", "ok");
    Ok(Json(result.into()))
}
