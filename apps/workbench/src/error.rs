//! # API Error Type
//!
//! Unified error type for workbench commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Workbench                          │
//! │                                                                         │
//! │  Editor                        Rust Backend                             │
//! │  ──────                        ────────────                             │
//! │                                                                         │
//! │  dispatch({ type: "setDate", payload: "01/03/2025" })                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation Error? ─── CoreError::Validation ───── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Empty name / unknown id ─── ActionOutcome::Unchanged ──────────►│  │
//! │  │         │                    (not an error)                      │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Notes generation never produces an `ApiError`: the generator always
//! resolves to a string.

use serde::Serialize;
use thiserror::Error;

use pricelist_core::{CoreError, ValidationError};

/// API error returned from workbench commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "date has invalid format: expected YYYY-MM-DD"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Document could not be rendered
    RenderError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CatalogEntryNotFound(id) => ApiError::not_found("Catalog entry", &id),
            CoreError::LineItemNotFound(id) => ApiError::not_found("Line item", &id),
            CoreError::Render(reason) => {
                tracing::error!("Render failed: {}", reason);
                ApiError::new(ErrorCode::RenderError, "Document could not be rendered")
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError = CoreError::CatalogEntryNotFound("inv1".into()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Catalog entry not found: inv1");

        let err: ApiError = CoreError::Render("boom".into()).into();
        assert_eq!(err.code, ErrorCode::RenderError);
    }

    #[test]
    fn test_validation_error_mapping() {
        let err: ApiError = ValidationError::Required {
            field: "date".into(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "date is required");
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::not_found("Line item", "42");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Line item not found: 42");
        assert_eq!(err.to_string(), "[NotFound] Line item not found: 42");
    }
}
