#![allow(dead_code)]

use std::sync::Arc;
use target_price::application::services::PricingService;
use target_price::state::AppState;

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(PricingService::default()))
}

pub fn create_state_with(service: PricingService) -> AppState {
    AppState::new(Arc::new(service))
}

/// Sums the `value` fields of a JSON breakdown array.
pub fn sum_components(components: &serde_json::Value) -> f64 {
    components
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["value"].as_f64().unwrap())
        .sum()
}
