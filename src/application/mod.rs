//! Application layer services implementing business logic.
//!
//! Services own the configured business parameters and provide a clean API
//! for HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::pricing_service::PricingService`] - Market estimates and target prices

pub mod services;
