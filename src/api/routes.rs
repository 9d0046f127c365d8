//! API route configuration.
//!
//! The API is public; requests are rate limited per client IP by
//! [`crate::api::middleware::rate_limit`].

use crate::api::handlers::{
    estimate_handler, estimate_query_handler, locations_handler, target_price_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET  /estimate`   - Market estimate from query parameters
/// - `POST /estimate`   - Market estimate from a JSON body
/// - `POST /calculate`  - Weighted-area target price
/// - `GET  /locations`  - Location catalogue with price weights
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/estimate",
            get(estimate_query_handler).post(estimate_handler),
        )
        .route("/calculate", post(target_price_handler))
        .route("/locations", get(locations_handler))
}
