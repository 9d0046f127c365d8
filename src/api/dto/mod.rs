//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Money amounts are serialized as JSON numbers.

pub mod estimate;
pub mod health;
pub mod locations;
pub mod target;
