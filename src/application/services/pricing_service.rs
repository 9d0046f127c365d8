//! Pricing service exposing the calculations with their configured parameters.

use crate::domain::entities::{PriceRequest, PriceResult, TargetPriceRequest, TargetPriceResult};
use crate::domain::pricing::{self, LocationRate, PricingError, PricingParams, TargetParams};

/// Service for computing apartment prices.
///
/// Holds the business parameters loaded at startup. It is immutable and
/// shared between requests behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct PricingService {
    params: PricingParams,
    target: TargetParams,
}

impl PricingService {
    /// Creates a new pricing service.
    pub fn new(params: PricingParams, target: TargetParams) -> Self {
        Self { params, target }
    }

    /// Computes the market estimate with its breakdown.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidInput`] naming the out-of-range field.
    pub fn estimate(&self, request: &PriceRequest) -> Result<PriceResult, PricingError> {
        pricing::estimate(&self.params, request)
    }

    /// Computes the weighted-area target price.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidInput`] naming the out-of-range field.
    pub fn target_price(
        &self,
        request: &TargetPriceRequest,
    ) -> Result<TargetPriceResult, PricingError> {
        pricing::target_price(&self.target, request)
    }

    /// Known locations, most expensive first, without the fallback entry.
    pub fn locations(&self) -> &[LocationRate] {
        &self.params.locations
    }

    /// Rate applied to locations that match no known entry.
    pub fn fallback_location(&self) -> &LocationRate {
        &self.params.fallback_location
    }

    pub fn params(&self) -> &PricingParams {
        &self.params
    }

    pub fn target_params(&self) -> &TargetParams {
        &self.target
    }
}
