//! # Domain Types
//!
//! Descriptive records attached to a price list: who issues it, who it is
//! for, and the document metadata.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ CompanyDetails  │   │    Quotation    │   │  HeaderLayout   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  id  "PL-2025-" │   │  Right          │       │
//! │  │  address        │   │  title, dates   │   │  Left           │       │
//! │  │  phone, email   │   │  rates (inert)  │   │  Center         │       │
//! │  │  logo_url       │   │  currency,notes │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │  ClientDetails  │   only used as AI notes context                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these types take part in pricing. Tax and discount rates are
//! captured for the document but never applied to any total.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::pricing::coerce_amount;
use crate::validation::{validate_iso_date, ValidationResult, ISO_DATE_FORMAT};

// =============================================================================
// Header Layout
// =============================================================================

/// Where the company block sits in the printed header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum HeaderLayout {
    /// Right-aligned (the natural start side for Arabic documents).
    #[default]
    Right,
    Left,
    Center,
}

impl HeaderLayout {
    pub const ALL: [HeaderLayout; 3] = [HeaderLayout::Right, HeaderLayout::Left, HeaderLayout::Center];

    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderLayout::Right => "right",
            HeaderLayout::Left => "left",
            HeaderLayout::Center => "center",
        }
    }
}

impl fmt::Display for HeaderLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeaderLayout {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HeaderLayout::ALL
            .into_iter()
            .find(|layout| layout.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "header_layout".to_string(),
                allowed: HeaderLayout::ALL.iter().map(|l| l.to_string()).collect(),
            })
    }
}

// =============================================================================
// Company Details
// =============================================================================

/// The issuing company, shown in the header and footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CompanyDetails {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    /// Logo image reference (URL or data URI).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

impl CompanyDetails {
    pub fn set_logo(&mut self, logo_url: impl Into<String>) {
        let logo_url = logo_url.into();
        self.logo_url = if logo_url.trim().is_empty() {
            None
        } else {
            Some(logo_url)
        };
    }

    pub fn clear_logo(&mut self) {
        self.logo_url = None;
    }
}

// =============================================================================
// Client Details
// =============================================================================

/// The addressee. Not printed; passed to the notes generator as context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClientDetails {
    pub name: String,
    pub company: String,
    pub address: String,
    pub email: String,
}

// =============================================================================
// Quotation
// =============================================================================

/// Document metadata for a price list.
///
/// ## Invariants
/// - `date` is an ISO `YYYY-MM-DD` string
/// - `due_date` is empty or an ISO date
/// - `tax_rate` and `discount_rate` are non-negative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Quotation {
    /// Reference printed on the document, e.g. "PL-2025-001".
    pub id: String,
    pub title: String,
    date: String,
    due_date: String,
    /// Captured, never applied to totals.
    tax_rate: f64,
    /// Captured, never applied to totals.
    discount_rate: f64,
    /// Currency label, e.g. "ر.س".
    pub currency: String,
    pub notes: String,
    pub header_layout: HeaderLayout,
}

impl Quotation {
    /// Default metadata for a price list issued on `date`.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveDate;
    /// use pricelist_core::Quotation;
    ///
    /// let q = Quotation::new_for(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    /// assert_eq!(q.id, "PL-2025-001");
    /// assert_eq!(q.date(), "2025-03-01");
    /// ```
    pub fn new_for(date: NaiveDate) -> Self {
        Quotation {
            id: format!("PL-{}-001", date.year()),
            title: "قائمة أسعار".to_string(),
            date: date.format(ISO_DATE_FORMAT).to_string(),
            due_date: String::new(),
            tax_rate: 0.0,
            discount_rate: 0.0,
            currency: "ر.س".to_string(),
            notes: String::new(),
            header_layout: HeaderLayout::Right,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    pub fn tax_rate(&self) -> f64 {
        self.tax_rate
    }

    pub fn discount_rate(&self) -> f64 {
        self.discount_rate
    }

    /// Sets the issue date (ISO `YYYY-MM-DD`, required).
    pub fn set_date(&mut self, date: &str) -> ValidationResult<()> {
        validate_iso_date("date", date, false)?;
        self.date = date.trim().to_string();
        Ok(())
    }

    /// Sets the due date (ISO `YYYY-MM-DD`, or empty for none).
    pub fn set_due_date(&mut self, due_date: &str) -> ValidationResult<()> {
        validate_iso_date("due_date", due_date, true)?;
        self.due_date = due_date.trim().to_string();
        Ok(())
    }

    pub fn set_tax_rate(&mut self, rate: f64) {
        self.tax_rate = coerce_amount(rate);
    }

    pub fn set_discount_rate(&mut self, rate: f64) {
        self.discount_rate = coerce_amount(rate);
    }

    /// Whether there is a notes block to print.
    pub fn has_notes(&self) -> bool {
        !self.notes.trim().is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
