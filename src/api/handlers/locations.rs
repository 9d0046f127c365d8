//! Handler for the location catalogue.

use axum::{Json, extract::State};

use crate::api::dto::locations::{LocationInfo, LocationsResponse};
use crate::state::AppState;

/// Lists the known locations with their price weights.
///
/// # Endpoint
///
/// `GET /api/locations`
pub async fn locations_handler(State(state): State<AppState>) -> Json<LocationsResponse> {
    let service = &state.pricing_service;

    Json(LocationsResponse {
        locations: service.locations().iter().map(LocationInfo::from).collect(),
        fallback: service.fallback_location().into(),
    })
}
