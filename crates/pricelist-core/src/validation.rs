//! # Validation Module
//!
//! Input validation utilities for pricelist-core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Web editor                                                    │
//! │  ├── Number fields parsed with parse_amount (bad input → 0)             │
//! │  └── Immediate preview of the package price                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Workspace reducer                                             │
//! │  ├── Catalog add with empty name → silent no-op                         │
//! │  └── THIS MODULE: names, ISO dates, header layout                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Pricing rule                                                  │
//! │  └── coerce_amount: NaN / negative → 0                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// ISO calendar date format used by the quotation dates.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required display label such as a catalog item name.
///
/// ## Rules
/// - Must not be empty or whitespace only
/// - Any length is accepted
///
/// ## Example
/// ```rust
/// use pricelist_core::validation::validate_label;
///
/// assert!(validate_label("name", "أرز بسمتي").is_ok());
/// assert!(validate_label("name", "   ").is_err());
/// ```
pub fn validate_label(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Date Validators
// =============================================================================

/// Validates an ISO `YYYY-MM-DD` date string.
///
/// When `allow_empty` is set, an empty (or whitespace) value is accepted and
/// means "no date".
///
/// ## Example
/// ```rust
/// use pricelist_core::validation::validate_iso_date;
///
/// assert!(validate_iso_date("date", "2025-03-01", false).is_ok());
/// assert!(validate_iso_date("due_date", "", true).is_ok());
/// assert!(validate_iso_date("date", "01/03/2025", false).is_err());
/// ```
pub fn validate_iso_date(field: &str, value: &str, allow_empty: bool) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        if allow_empty {
            return Ok(());
        }
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).map_err(|_| {
        ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "expected YYYY-MM-DD".to_string(),
        }
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_label() {
        assert!(validate_label("name", "Rice").is_ok());
        assert!(validate_label("name", "  Rice  ").is_ok());

        assert_eq!(
            validate_label("name", ""),
            Err(ValidationError::Required {
                field: "name".to_string()
            })
        );
        assert!(validate_label("name", "\t \n").is_err());
        assert!(validate_label("name", &"ر".repeat(5_000)).is_ok());
    }

    #[test]
    fn test_validate_iso_date() {
        assert!(validate_iso_date("date", "2024-02-29", false).is_ok());
        assert!(validate_iso_date("date", "2023-02-29", false).is_err());
        assert!(validate_iso_date("date", "tomorrow", false).is_err());
        assert!(validate_iso_date("date", "", false).is_err());
        assert!(validate_iso_date("due_date", "  ", true).is_ok());
    }
}
