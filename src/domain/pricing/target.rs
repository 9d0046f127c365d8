//! Target price from the weighted area, a fixed discount and a capped gap
//! to the market price.

use rust_decimal::Decimal;

use super::error::PricingError;
use super::params::TargetParams;
use crate::domain::entities::{Component, TargetPriceRequest, TargetPriceResult};

/// Largest accepted area of any kind, in sqm.
const MAX_AREA_SQM: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);
/// Largest accepted price per sqm, in ILS.
const MAX_PRICE_PER_SQM: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 0);

/// Weighted area of the apartment, with the contribution of each area kind.
pub fn weighted_area(
    params: &TargetParams,
    request: &TargetPriceRequest,
) -> (Decimal, Vec<Component>) {
    let coefficients = &params.coefficients;
    let components = vec![
        Component::new("apartment", request.apartment_area * coefficients.apartment),
        Component::new("balcony", request.balcony_area * coefficients.balcony),
        Component::new("garden", request.garden_area * coefficients.garden),
        Component::new(
            "parking",
            Decimal::from(request.parking_spots) * coefficients.parking,
        ),
    ];
    let total = components.iter().map(|c| c.value).sum();

    (total, components)
}

/// Computes the target price.
///
/// 1. Base and current totals are the respective prices per sqm times the
///    weighted area.
/// 2. The candidate price is the base total less the discount.
/// 3. If the current total exceeds the candidate by more than the allowed
///    maximum, the price becomes `current total - maximum` instead.
/// 4. The price never exceeds the base total.
///
/// # Errors
///
/// Returns [`PricingError::InvalidInput`] when the apartment area is not
/// positive, or when any other area or price is negative or implausibly large.
pub fn target_price(
    params: &TargetParams,
    request: &TargetPriceRequest,
) -> Result<TargetPriceResult, PricingError> {
    validate(request)?;

    let (weighted_area, area_components) = weighted_area(params, request);

    let base_total = request.base_price_per_sqm * weighted_area;
    let current_total = request.current_price_per_sqm * weighted_area;
    let discounted = base_total * (Decimal::ONE - params.discount_rate);
    let difference = current_total - discounted;

    let max_difference_exceeded = difference > params.max_difference;
    let capped = if max_difference_exceeded {
        current_total - params.max_difference
    } else {
        discounted
    };
    let final_price = capped.min(base_total);

    Ok(TargetPriceResult {
        weighted_area: weighted_area.round_dp(2).normalize(),
        area_components,
        base_total_price: shekels(base_total),
        current_total_price: shekels(current_total),
        discounted_price: shekels(discounted),
        price_difference: shekels(difference),
        final_price: shekels(final_price),
        savings: shekels(current_total - final_price),
        max_difference_exceeded,
    })
}

/// Rounds to whole shekels, half to even.
fn shekels(amount: Decimal) -> Decimal {
    amount.round().normalize()
}

fn validate(request: &TargetPriceRequest) -> Result<(), PricingError> {
    if request.apartment_area <= Decimal::ZERO {
        return Err(PricingError::invalid(
            "apartment_area",
            format!("must be greater than 0, got {}", request.apartment_area),
        ));
    }

    let bounded = [
        ("apartment_area", request.apartment_area, MAX_AREA_SQM),
        ("balcony_area", request.balcony_area, MAX_AREA_SQM),
        ("garden_area", request.garden_area, MAX_AREA_SQM),
        ("base_price_per_sqm", request.base_price_per_sqm, MAX_PRICE_PER_SQM),
        ("current_price_per_sqm", request.current_price_per_sqm, MAX_PRICE_PER_SQM),
    ];
    for (field, value, max) in bounded {
        if value < Decimal::ZERO {
            return Err(PricingError::invalid(
                field,
                format!("must not be negative, got {value}"),
            ));
        }
        if value > max {
            return Err(PricingError::invalid(
                field,
                format!("must not exceed {max}, got {value}"),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request() -> TargetPriceRequest {
        TargetPriceRequest {
            apartment_area: dec!(100),
            balcony_area: dec!(10),
            garden_area: dec!(0),
            parking_spots: 1,
            base_price_per_sqm: dec!(20000),
            current_price_per_sqm: dec!(30000),
        }
    }

    #[test]
    fn test_weighted_area() {
        let (area, components) = weighted_area(&TargetParams::default(), &request());

        assert_eq!(area, dec!(105));
        assert_eq!(components.len(), 4);
        assert_eq!(components[1].label, "balcony");
        assert_eq!(components[1].value, dec!(3));
        assert_eq!(components[3].value, dec!(2));
    }

    #[test]
    fn test_capped_by_base_total() {
        let result = target_price(&TargetParams::default(), &request()).unwrap();

        assert_eq!(result.weighted_area, dec!(105));
        assert_eq!(result.base_total_price, dec!(2100000));
        assert_eq!(result.current_total_price, dec!(3150000));
        assert_eq!(result.discounted_price, dec!(1575000));
        assert_eq!(result.price_difference, dec!(1575000));
        assert!(result.max_difference_exceeded);
        assert_eq!(result.final_price, dec!(2100000));
        assert_eq!(result.savings, dec!(1050000));
    }

    #[test]
    fn test_max_difference_applies() {
        let req = TargetPriceRequest {
            apartment_area: dec!(80),
            balcony_area: dec!(0),
            garden_area: dec!(0),
            parking_spots: 0,
            base_price_per_sqm: dec!(30000),
            current_price_per_sqm: dec!(30000),
        };
        let result = target_price(&TargetParams::default(), &req).unwrap();

        // base 2.4M, discounted 1.8M, gap 600k is not above the cap
        assert_eq!(result.discounted_price, dec!(1800000));
        assert_eq!(result.price_difference, dec!(600000));
        assert!(!result.max_difference_exceeded);
        assert_eq!(result.final_price, dec!(1800000));

        let req = TargetPriceRequest {
            current_price_per_sqm: dec!(35000),
            ..req
        };
        let result = target_price(&TargetParams::default(), &req).unwrap();

        // current 2.8M, gap 1M, so the price is 2.8M - 600k
        assert!(result.max_difference_exceeded);
        assert_eq!(result.final_price, dec!(2200000));
        assert_eq!(result.savings, dec!(600000));
    }

    #[test]
    fn test_discount_when_market_is_close() {
        let req = TargetPriceRequest {
            apartment_area: dec!(60),
            balcony_area: dec!(5),
            garden_area: dec!(20),
            parking_spots: 0,
            base_price_per_sqm: dec!(15000),
            current_price_per_sqm: dec!(16000),
        };
        let result = target_price(&TargetParams::default(), &req).unwrap();

        // 60 + 1.5 + 8 = 69.5 sqm
        assert_eq!(result.weighted_area, dec!(69.5));
        assert_eq!(result.base_total_price, dec!(1042500));
        assert_eq!(result.discounted_price, dec!(781875));
        assert!(!result.max_difference_exceeded);
        assert_eq!(result.final_price, dec!(781875));
        assert_eq!(result.savings, dec!(330125));
    }

    #[test]
    fn test_rounds_half_to_even() {
        assert_eq!(shekels(dec!(2.5)), dec!(2));
        assert_eq!(shekels(dec!(3.5)), dec!(4));
        assert_eq!(shekels(dec!(10.49)), dec!(10));
    }

    #[test]
    fn test_invalid_inputs_are_named() {
        let params = TargetParams::default();

        let err = target_price(
            &params,
            &TargetPriceRequest {
                apartment_area: dec!(0),
                ..request()
            },
        )
        .unwrap_err();
        assert_eq!(err.field(), "apartment_area");

        let err = target_price(
            &params,
            &TargetPriceRequest {
                garden_area: dec!(-1),
                ..request()
            },
        )
        .unwrap_err();
        assert_eq!(err.field(), "garden_area");

        let err = target_price(
            &params,
            &TargetPriceRequest {
                current_price_per_sqm: dec!(-5),
                ..request()
            },
        )
        .unwrap_err();
        assert_eq!(err.field(), "current_price_per_sqm");

        let err = target_price(
            &params,
            &TargetPriceRequest {
                base_price_per_sqm: dec!(10000001),
                ..request()
            },
        )
        .unwrap_err();
        assert_eq!(err.field(), "base_price_per_sqm");

        let oversized = [
            (
                TargetPriceRequest {
                    apartment_area: dec!(100001),
                    ..request()
                },
                "apartment_area",
            ),
            (
                TargetPriceRequest {
                    balcony_area: dec!(100001),
                    ..request()
                },
                "balcony_area",
            ),
            (
                TargetPriceRequest {
                    garden_area: dec!(100001),
                    ..request()
                },
                "garden_area",
            ),
        ];
        for (req, field) in oversized {
            assert_eq!(target_price(&params, &req).unwrap_err().field(), field);
        }

        // The bounds themselves are accepted
        let at_limit = TargetPriceRequest {
            apartment_area: dec!(100000),
            current_price_per_sqm: dec!(10000000),
            ..request()
        };
        assert!(target_price(&params, &at_limit).is_ok());
    }
}
