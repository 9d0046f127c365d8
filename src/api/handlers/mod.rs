//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod estimate;
pub mod health;
pub mod locations;
pub mod target;

pub use estimate::{estimate_handler, estimate_query_handler};
pub use health::health_handler;
pub use locations::locations_handler;
pub use target::target_price_handler;

/// Counts a calculation request by kind and outcome.
pub(crate) fn record_outcome(kind: &'static str, outcome: &'static str) {
    metrics::counter!("pricing_requests_total", "kind" => kind, "outcome" => outcome).increment(1);
}
