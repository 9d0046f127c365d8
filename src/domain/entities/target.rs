//! Target price entities for the weighted-area formula.

use rust_decimal::Decimal;

use super::price::Component;

/// Inputs of the weighted-area target price calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetPriceRequest {
    pub apartment_area: Decimal,
    pub balcony_area: Decimal,
    pub garden_area: Decimal,
    pub parking_spots: u32,
    /// Price per weighted sqm the discount is applied to.
    pub base_price_per_sqm: Decimal,
    /// Present market price per weighted sqm.
    pub current_price_per_sqm: Decimal,
}

/// Outcome of the target price calculation.
///
/// Money amounts are rounded to whole shekels, the weighted area to two
/// decimal places.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPriceResult {
    pub weighted_area: Decimal,
    /// Contribution of each area kind to the weighted area, in sqm.
    pub area_components: Vec<Component>,
    pub base_total_price: Decimal,
    pub current_total_price: Decimal,
    pub discounted_price: Decimal,
    pub price_difference: Decimal,
    pub final_price: Decimal,
    pub savings: Decimal,
    /// True when the difference to the market price hit the configured cap.
    pub max_difference_exceeded: bool,
}
