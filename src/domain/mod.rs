//! Domain layer containing the pricing data model and calculations.
//!
//! The domain layer has no dependencies on the HTTP, CLI or configuration
//! layers; everything here is plain data and pure functions.
//!
//! # Architecture
//!
//! - [`entities`] - Request and result types
//! - [`pricing`] - Pricing formulas, their parameters and errors

pub mod entities;
pub mod pricing;
