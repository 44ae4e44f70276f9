//! # Error Types
//!
//! Domain-specific error types for pricelist-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pricelist-core errors (this file)                                      │
//! │  ├── CoreError        - General domain errors                           │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  pricelist-notes errors (separate crate)                                │
//! │  └── NotesError       - Notes generation failures (never surfaced)      │
//! │                                                                         │
//! │  workbench errors (in app)                                              │
//! │  └── ApiError         - What the editor sees (serialized)               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Editor                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Catalog and ledger operations do not return errors at all: an empty name
//! on add or an unknown id is a silent no-op. Errors here cover metadata
//! input (dates, rates) and renderer failures.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Catalog entry cannot be found.
    #[error("Catalog entry not found: {0}")]
    CatalogEntryNotFound(String),

    /// Line item cannot be found.
    #[error("Line item not found: {0}")]
    LineItemNotFound(String),

    /// A document renderer could not produce its output.
    #[error("Render failed: {0}")]
    Render(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., invalid date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::CatalogEntryNotFound("inv1".to_string());
        assert_eq!(err.to_string(), "Catalog entry not found: inv1");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::InvalidFormat {
            field: "date".to_string(),
            reason: "expected YYYY-MM-DD".to_string(),
        };
        assert_eq!(err.to_string(), "date has invalid format: expected YYYY-MM-DD");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
