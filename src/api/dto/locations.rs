//! DTOs for the location catalogue endpoint.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::pricing::LocationRate;

/// A selectable location with its price weight.
#[derive(Debug, Serialize)]
pub struct LocationInfo {
    pub code: String,
    pub label: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub weight: Decimal,
}

impl From<&LocationRate> for LocationInfo {
    fn from(rate: &LocationRate) -> Self {
        Self {
            code: rate.code.to_string(),
            label: rate.label.to_string(),
            weight: rate.weight,
        }
    }
}

/// Known locations plus the rate used for anything else.
#[derive(Debug, Serialize)]
pub struct LocationsResponse {
    pub locations: Vec<LocationInfo>,
    pub fallback: LocationInfo,
}
