//! Utility functions shared by the HTTP layer.
//!
//! - [`rejection`] - Field extraction from extractor rejection messages

pub mod rejection;
