//! Pure pricing functions and their business parameters.
//!
//! Both calculations are deterministic: identical inputs always produce
//! identical outputs, and nothing here performs I/O or holds state.
//!
//! - [`estimate::estimate`] - Market estimate with an itemised breakdown
//! - [`target::target_price`] - Weighted-area target price with a capped discount

pub mod error;
pub mod estimate;
pub mod params;
pub mod target;

pub use error::PricingError;
pub use estimate::estimate;
pub use params::{AreaCoefficients, FloorBand, LocationRate, PricingParams, TargetParams};
pub use target::target_price;
