//! HTTP error type and the JSON error envelope.
//!
//! Every error response has the shape:
//!
//! ```json
//! {
//!   "error": {
//!     "code": "validation_error",
//!     "message": "Invalid value for 'size_sqm': must be greater than 0, got 0",
//!     "details": { "field": "size_sqm" }
//!   }
//! }
//! ```

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

use crate::domain::pricing::PricingError;
use crate::utils::rejection::offending_field;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error code, message and details.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    /// Converts the error into the serializable envelope payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let info = self.to_error_info();
        write!(f, "{}: {}", info.code, info.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<PricingError> for AppError {
    fn from(e: PricingError) -> Self {
        AppError::bad_request(e.to_string(), json!({ "field": e.field() }))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        let mut fields: Vec<_> = e.field_errors().into_keys().map(|k| k.to_string()).collect();
        fields.sort();

        let details = match fields.first() {
            Some(first) => json!({ "field": first, "fields": fields }),
            None => json!({}),
        };

        AppError::bad_request(format!("Validation failed: {}", e), details)
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        rejection_error(e.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        rejection_error(e.body_text())
    }
}

fn rejection_error(message: String) -> AppError {
    let details = match offending_field(&message) {
        Some(field) => json!({ "field": field }),
        None => json!({}),
    };

    AppError::bad_request(message, details)
}
