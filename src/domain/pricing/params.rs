//! Business parameters of the pricing formulas.
//!
//! The values here are configuration data rather than logic: the defaults
//! reproduce the calculator's published rates, and [`crate::config::Config`]
//! lets the scalar ones be overridden from the environment.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::ops::RangeInclusive;

/// Price weight of one location relative to the national base rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationRate {
    /// Stable code used by the API, e.g. `tel_aviv`.
    pub code: &'static str,
    /// Display name shown in the calculator.
    pub label: &'static str,
    pub weight: Decimal,
}

impl LocationRate {
    const fn new(code: &'static str, label: &'static str, weight: Decimal) -> Self {
        Self {
            code,
            label,
            weight,
        }
    }
}

/// Floor range with its fractional price adjustment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorBand {
    pub floors: RangeInclusive<i32>,
    pub adjustment: Decimal,
}

/// Parameters of the market estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingParams {
    /// National base rate in ILS per sqm before the location weight.
    pub base_price_per_sqm: Decimal,
    pub locations: Vec<LocationRate>,
    /// Rate used when the location does not match any known code or name.
    pub fallback_location: LocationRate,
    pub floor_bands: Vec<FloorBand>,
    /// Depreciation per year of building age.
    pub age_depreciation_per_year: Decimal,
    /// Upper bound of the total age depreciation.
    pub max_age_depreciation: Decimal,
    pub condition_range: RangeInclusive<Decimal>,
    pub market_adjustment_range: RangeInclusive<Decimal>,
    pub max_size_sqm: Decimal,
    pub max_building_age: Decimal,
}

impl Default for PricingParams {
    fn default() -> Self {
        Self {
            base_price_per_sqm: dec!(20000),
            locations: vec![
                LocationRate::new("tel_aviv", "תל אביב", dec!(2.4)),
                LocationRate::new("jerusalem", "ירושלים", dec!(1.9)),
                LocationRate::new("center", "מרכז", dec!(1.5)),
                LocationRate::new("sharon", "השרון", dec!(1.4)),
                LocationRate::new("shfela", "השפלה", dec!(1.2)),
                LocationRate::new("haifa", "חיפה", dec!(0.9)),
                LocationRate::new("north", "צפון", dec!(0.7)),
                LocationRate::new("south", "דרום", dec!(0.65)),
            ],
            fallback_location: LocationRate::new("other", "אחר", dec!(1.0)),
            floor_bands: vec![
                FloorBand {
                    floors: i32::MIN..=-1,
                    adjustment: dec!(-0.10),
                },
                FloorBand {
                    floors: 0..=0,
                    adjustment: dec!(-0.05),
                },
                FloorBand {
                    floors: 1..=2,
                    adjustment: dec!(0),
                },
                FloorBand {
                    floors: 3..=5,
                    adjustment: dec!(0.02),
                },
                FloorBand {
                    floors: 6..=10,
                    adjustment: dec!(0.04),
                },
                FloorBand {
                    floors: 11..=i32::MAX,
                    adjustment: dec!(0.06),
                },
            ],
            age_depreciation_per_year: dec!(0.01),
            max_age_depreciation: dec!(0.30),
            condition_range: dec!(0.7)..=dec!(1.3),
            market_adjustment_range: dec!(-0.25)..=dec!(0.25),
            max_size_sqm: dec!(100000),
            max_building_age: dec!(300),
        }
    }
}

impl PricingParams {
    /// Resolves a location code or free-text name to its rate.
    ///
    /// Matching ignores case and surrounding whitespace, treats spaces and
    /// dashes as underscores, and also accepts the display name. Anything
    /// unrecognised falls back to [`PricingParams::fallback_location`].
    pub fn resolve_location(&self, input: &str) -> &LocationRate {
        let trimmed = input.trim();
        let normalized: String = trimmed
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        self.locations
            .iter()
            .chain(std::iter::once(&self.fallback_location))
            .find(|rate| rate.code == normalized || rate.label == trimmed)
            .unwrap_or(&self.fallback_location)
    }

    /// Fractional adjustment for the given floor.
    pub fn floor_adjustment(&self, floor: i32) -> Decimal {
        self.floor_bands
            .iter()
            .find(|band| band.floors.contains(&floor))
            .map(|band| band.adjustment)
            .unwrap_or(Decimal::ZERO)
    }

    /// Fractional depreciation for the given building age, capped.
    pub fn age_depreciation(&self, building_age: Decimal) -> Decimal {
        (building_age * self.age_depreciation_per_year).min(self.max_age_depreciation)
    }
}

/// Weight of each area kind in the weighted area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaCoefficients {
    pub apartment: Decimal,
    pub balcony: Decimal,
    pub garden: Decimal,
    /// Weighted sqm credited per parking spot.
    pub parking: Decimal,
}

impl Default for AreaCoefficients {
    fn default() -> Self {
        Self {
            apartment: dec!(1.0),
            balcony: dec!(0.3),
            garden: dec!(0.4),
            parking: dec!(2.0),
        }
    }
}

/// Parameters of the target price formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetParams {
    pub coefficients: AreaCoefficients,
    /// Discount applied to the base total, `0.25` is 25%.
    pub discount_rate: Decimal,
    /// Largest allowed gap between the market total and the target price.
    pub max_difference: Decimal,
}

impl Default for TargetParams {
    fn default() -> Self {
        Self {
            coefficients: AreaCoefficients::default(),
            discount_rate: dec!(0.25),
            max_difference: dec!(600000),
        }
    }
}
