//! Core domain entities representing the pricing data model.
//!
//! Entities are plain data structures without business logic. They are created
//! per request and never persisted.
//!
//! # Entity Types
//!
//! - [`PriceRequest`] / [`PriceResult`] - Market estimate with an itemised breakdown
//! - [`TargetPriceRequest`] / [`TargetPriceResult`] - Weighted-area target price

pub mod price;
pub mod target;

pub use price::{Component, PriceRequest, PriceResult};
pub use target::{TargetPriceRequest, TargetPriceResult};
