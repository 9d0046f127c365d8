//! Market estimate entities: the request attributes and the itemised result.

use rust_decimal::Decimal;

/// Apartment attributes supplied by the caller for a single estimate.
///
/// Created per request and discarded after the response is produced.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRequest {
    /// Location code (e.g. `center`) or free text such as `Tel Aviv`.
    pub location: String,
    pub size_sqm: Decimal,
    /// Floor number; `0` is the ground floor, negative values are basements.
    pub floor: i32,
    /// Building age in years.
    pub building_age: Decimal,
    /// Multiplier describing the apartment condition, `1.0` is average.
    pub condition_factor: Decimal,
    /// Fractional market correction, e.g. `0.05` for a 5% hotter market.
    pub market_adjustment: Decimal,
}

/// One named term of the estimate breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub label: &'static str,
    pub value: Decimal,
}

impl Component {
    /// Creates a component; the value is normalized so zero terms never carry a sign.
    pub fn new(label: &'static str, value: Decimal) -> Self {
        Self {
            label,
            value: value.normalize(),
        }
    }
}

/// Estimated price together with the terms it was built from.
///
/// `total_price` is always the sum of `components`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceResult {
    /// Resolved location code the weight was taken from.
    pub location: &'static str,
    pub location_weight: Decimal,
    pub total_price: Decimal,
    pub components: Vec<Component>,
}

impl PriceResult {
    /// Builds a result whose total is the sum of the given components.
    pub fn from_components(
        location: &'static str,
        location_weight: Decimal,
        components: Vec<Component>,
    ) -> Self {
        let total_price = components.iter().map(|c| c.value).sum();

        Self {
            location,
            location_weight,
            total_price,
            components,
        }
    }

    /// Looks up a component value by its label.
    pub fn component(&self, label: &str) -> Option<Decimal> {
        self.components
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.value)
    }
}
