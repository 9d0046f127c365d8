//! DTOs for the market estimate endpoint.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Component, PriceRequest, PriceResult};

fn default_condition_factor() -> Decimal {
    dec!(1.0)
}

/// Apartment attributes, accepted as a JSON body or as query parameters.
///
/// `condition_factor` defaults to `1.0` and `market_adjustment` to `0`.
/// Numeric ranges are checked by the pricing function itself so that the
/// error names the offending field.
#[derive(Debug, Deserialize, Validate)]
pub struct EstimateRequest {
    /// Location code or free-text name.
    #[validate(length(min = 1, max = 100))]
    pub location: String,

    pub size_sqm: Decimal,

    pub floor: i32,

    pub building_age: Decimal,

    #[serde(default = "default_condition_factor")]
    pub condition_factor: Decimal,

    #[serde(default)]
    pub market_adjustment: Decimal,
}

impl From<EstimateRequest> for PriceRequest {
    fn from(req: EstimateRequest) -> Self {
        PriceRequest {
            location: req.location,
            size_sqm: req.size_sqm,
            floor: req.floor,
            building_age: req.building_age,
            condition_factor: req.condition_factor,
            market_adjustment: req.market_adjustment,
        }
    }
}

/// One line of the breakdown.
#[derive(Debug, Serialize)]
pub struct ComponentDto {
    pub label: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
}

impl From<Component> for ComponentDto {
    fn from(c: Component) -> Self {
        Self {
            label: c.label.to_string(),
            value: c.value,
        }
    }
}

/// Estimated price with its breakdown; `total_price` is the sum of `components`.
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub location: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub location_weight: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    pub components: Vec<ComponentDto>,
}

impl From<PriceResult> for EstimateResponse {
    fn from(result: PriceResult) -> Self {
        Self {
            location: result.location.to_string(),
            location_weight: result.location_weight,
            total_price: result.total_price,
            components: result.components.into_iter().map(Into::into).collect(),
        }
    }
}
