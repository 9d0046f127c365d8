//! DTOs for the target price endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::estimate::ComponentDto;
use crate::domain::entities::{TargetPriceRequest, TargetPriceResult};

/// Areas in sqm and prices in ILS per weighted sqm.
///
/// Balcony and garden areas and the parking count default to zero.
#[derive(Debug, Deserialize, Validate)]
pub struct TargetRequest {
    pub apartment_area: Decimal,

    #[serde(default)]
    pub balcony_area: Decimal,

    #[serde(default)]
    pub garden_area: Decimal,

    #[serde(default)]
    #[validate(range(max = 50))]
    pub parking_spots: u32,

    pub base_price_per_sqm: Decimal,

    pub current_price_per_sqm: Decimal,
}

impl From<TargetRequest> for TargetPriceRequest {
    fn from(req: TargetRequest) -> Self {
        TargetPriceRequest {
            apartment_area: req.apartment_area,
            balcony_area: req.balcony_area,
            garden_area: req.garden_area,
            parking_spots: req.parking_spots,
            base_price_per_sqm: req.base_price_per_sqm,
            current_price_per_sqm: req.current_price_per_sqm,
        }
    }
}

/// Target price with the intermediate amounts shown to the user.
#[derive(Debug, Serialize)]
pub struct TargetResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub weighted_area: Decimal,
    pub area_components: Vec<ComponentDto>,
    #[serde(with = "rust_decimal::serde::float")]
    pub base_total_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub current_total_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub discounted_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub price_difference: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub final_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub savings: Decimal,
    pub max_difference_exceeded: bool,
}

impl From<TargetPriceResult> for TargetResponse {
    fn from(result: TargetPriceResult) -> Self {
        Self {
            weighted_area: result.weighted_area,
            area_components: result.area_components.into_iter().map(Into::into).collect(),
            base_total_price: result.base_total_price,
            current_total_price: result.current_total_price,
            discounted_price: result.discounted_price,
            price_difference: result.price_difference,
            final_price: result.final_price,
            savings: result.savings,
            max_difference_exceeded: result.max_difference_exceeded,
        }
    }
}
