//! Calculator page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use rust_decimal::Decimal;

use crate::state::AppState;

/// A location option in the calculator form.
pub struct LocationOption {
    pub code: &'static str,
    pub label: &'static str,
    pub weight: Decimal,
}

/// Template for the calculator page.
///
/// Renders `templates/calculator.html` with:
/// - Market estimate form (location select built from the rate table)
/// - Target price form
/// - Empty result panels filled by `static/calculator.js`
#[derive(Template, WebTemplate)]
#[template(path = "calculator.html")]
pub struct CalculatorTemplate {
    pub locations: Vec<LocationOption>,
    pub base_price_per_sqm: Decimal,
    pub discount_percent: Decimal,
    pub max_difference: Decimal,
    pub version: &'static str,
}

/// Renders the calculator page.
///
/// # Endpoint
///
/// `GET /`
///
/// # Template
///
/// Uses `templates/calculator.html` for server-side rendering.
/// The page posts to `/api/estimate` and `/api/calculate` via JavaScript
/// and renders the returned breakdown.
pub async fn calculator_handler(State(state): State<AppState>) -> impl IntoResponse {
    let service = &state.pricing_service;
    let target = service.target_params();

    let locations = service
        .locations()
        .iter()
        .chain(std::iter::once(service.fallback_location()))
        .map(|rate| LocationOption {
            code: rate.code,
            label: rate.label,
            weight: rate.weight,
        })
        .collect();

    CalculatorTemplate {
        locations,
        base_price_per_sqm: service.params().base_price_per_sqm,
        discount_percent: (target.discount_rate * Decimal::ONE_HUNDRED).normalize(),
        max_difference: target.max_difference,
        version: env!("CARGO_PKG_VERSION"),
    }
}
