//! Errors raised by the pricing functions.

/// The only failure mode of a pure pricing calculation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Invalid value for '{field}': {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl PricingError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending input field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidInput { field, .. } => field,
        }
    }
}
