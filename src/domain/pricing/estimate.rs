//! Market estimate: base rate scaled by location, adjusted per attribute.

use rust_decimal::Decimal;

use super::error::PricingError;
use super::params::PricingParams;
use crate::domain::entities::{Component, PriceRequest, PriceResult};

pub const LABEL_BASE: &str = "base";
pub const LABEL_FLOOR: &str = "floor";
pub const LABEL_BUILDING_AGE: &str = "building_age";
pub const LABEL_CONDITION: &str = "condition";
pub const LABEL_MARKET: &str = "market_adjustment";

/// Computes the estimated price of an apartment with its breakdown.
///
/// Every adjustment is derived from the same base amount
/// (`base rate × location weight × size`), so the terms are independent of
/// each other and their order does not matter. The total is the sum of the
/// returned components.
///
/// # Errors
///
/// Returns [`PricingError::InvalidInput`] naming the field when `size_sqm`,
/// `building_age`, `condition_factor` or `market_adjustment` is out of range,
/// or when `location` is blank.
pub fn estimate(params: &PricingParams, request: &PriceRequest) -> Result<PriceResult, PricingError> {
    validate(params, request)?;

    let rate = params.resolve_location(&request.location);
    let base = params.base_price_per_sqm * rate.weight * request.size_sqm;

    let floor = base * params.floor_adjustment(request.floor);
    let age = -(base * params.age_depreciation(request.building_age));
    let condition = base * (request.condition_factor - Decimal::ONE);
    let market = base * request.market_adjustment;

    Ok(PriceResult::from_components(
        rate.code,
        rate.weight,
        vec![
            Component::new(LABEL_BASE, base),
            Component::new(LABEL_FLOOR, floor),
            Component::new(LABEL_BUILDING_AGE, age),
            Component::new(LABEL_CONDITION, condition),
            Component::new(LABEL_MARKET, market),
        ],
    ))
}

fn validate(params: &PricingParams, request: &PriceRequest) -> Result<(), PricingError> {
    if request.location.trim().is_empty() {
        return Err(PricingError::invalid("location", "must not be empty"));
    }

    if request.size_sqm <= Decimal::ZERO {
        return Err(PricingError::invalid(
            "size_sqm",
            format!("must be greater than 0, got {}", request.size_sqm),
        ));
    }
    if request.size_sqm > params.max_size_sqm {
        return Err(PricingError::invalid(
            "size_sqm",
            format!("must not exceed {}, got {}", params.max_size_sqm, request.size_sqm),
        ));
    }

    if request.building_age < Decimal::ZERO || request.building_age > params.max_building_age {
        return Err(PricingError::invalid(
            "building_age",
            format!(
                "must be between 0 and {}, got {}",
                params.max_building_age, request.building_age
            ),
        ));
    }

    if !params.condition_range.contains(&request.condition_factor) {
        return Err(PricingError::invalid(
            "condition_factor",
            format!(
                "must be between {} and {}, got {}",
                params.condition_range.start(),
                params.condition_range.end(),
                request.condition_factor
            ),
        ));
    }

    if !params
        .market_adjustment_range
        .contains(&request.market_adjustment)
    {
        return Err(PricingError::invalid(
            "market_adjustment",
            format!(
                "must be between {} and {}, got {}",
                params.market_adjustment_range.start(),
                params.market_adjustment_range.end(),
                request.market_adjustment
            ),
        ));
    }

    Ok(())
}
