//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::PricingService;

/// State cloned into every request.
///
/// Holds only immutable data, so requests never coordinate with each other.
#[derive(Clone)]
pub struct AppState {
    pub pricing_service: Arc<PricingService>,
}

impl AppState {
    pub fn new(pricing_service: Arc<PricingService>) -> Self {
        Self { pricing_service }
    }
}
