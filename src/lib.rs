//! # Target Price
//!
//! An apartment price calculator served over HTTP with Axum.
//!
//! Two deterministic calculations are offered:
//!
//! - **Market estimate** - a national base rate per sqm scaled by a location
//!   weight and adjusted for floor, building age, condition and market, with
//!   every term reported in a breakdown that sums to the total
//! - **Target price** - a weighted area (apartment, balcony, garden, parking)
//!   priced at a discounted base rate, capped against the current market price
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and pure pricing functions
//! - **Application Layer** ([`application`]) - Pricing service holding the parameters
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Calculator page rendered with Askama
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional overrides
//! export LISTEN="0.0.0.0:8181"
//! export BASE_PRICE_PER_SQM="20000"
//!
//! # Start the service
//! cargo run
//!
//! # Or price an apartment from the terminal
//! cargo run --bin quote -- estimate --location center --size-sqm 80 --floor 3 --building-age 5
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::PricingService;
    pub use crate::domain::entities::{
        Component, PriceRequest, PriceResult, TargetPriceRequest, TargetPriceResult,
    };
    pub use crate::domain::pricing::{PricingError, PricingParams, TargetParams};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
