//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::calculator_handler;
use axum::{Router, routing::get};

/// Browser-facing routes.
///
/// # Endpoints
///
/// - `GET /` - Calculator page
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(calculator_handler))
}
