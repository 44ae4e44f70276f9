//! # pricelist-core: Pure Business Logic for Siarli Price Lists
//!
//! This crate holds the pricing rule and the two stores that must stay
//! consistent with it: the reusable catalog and the line-item ledger of the
//! document being edited.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Siarli Price List Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Editor (browser)                         │   │
//! │  │   Catalog tab ──► Editor tab ──► Preview tab ──► Print / PDF    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ actions                                │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 apps/workbench (state reducer)                  │   │
//! │  └──────────────┬──────────────────────────────────┬───────────────┘   │
//! │                 │                                  │                    │
//! │  ┌──────────────▼──────────────────────┐  ┌────────▼────────────────┐  │
//! │  │     ★ pricelist-core (THIS CRATE) ★ │  │    pricelist-notes      │  │
//! │  │                                     │  │    (Gemini notes)       │  │
//! │  │  pricing ─► catalog ─► ledger       │  └─────────────────────────┘  │
//! │  │                  └────► document    │                               │
//! │  │  NO I/O • NO NETWORK • PURE LOGIC   │                               │
//! │  └─────────────────────────────────────┘                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`pricing`] - The derived-total rule and numeric input coercion
//! - [`catalog`] - Reusable priced packages (the "inventory" tab)
//! - [`ledger`] - Ordered line items of the current document
//! - [`types`] - Company, client and quotation metadata
//! - [`document`] - Print layout model and renderer seam
//! - [`validation`] - Input validation helpers
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use pricelist_core::catalog::{CatalogDraft, CatalogStore};
//! use pricelist_core::ledger::LineItemLedger;
//!
//! let mut catalog = CatalogStore::new();
//! let rice = catalog
//!     .add(CatalogDraft::new("Rice", "sack", 40.0, 6.0))
//!     .unwrap();
//!
//! let mut ledger = LineItemLedger::new();
//! ledger.add_from_catalog(&catalog, &rice);
//!
//! assert_eq!(ledger.items()[0].sub_price(), 240.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod document;
pub mod error;
pub mod ledger;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{CatalogDraft, CatalogEntry, CatalogField, CatalogStore};
pub use document::{DocumentModel, DocumentRenderer, PlainTextRenderer};
pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::{LineItem, LineItemField, LineItemLedger};
pub use pricing::derived_total;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum number of table rows on a printed sheet.
///
/// Short price lists are padded with blank rows up to this count so every
/// printed page has the same visual weight.
pub const MIN_PRINT_ROWS: usize = 12;

/// Default package label offered by the catalog form ("sack").
pub const DEFAULT_SUB_UNIT_NAME: &str = "شوال";

/// Default base units per package offered by the catalog form.
pub const DEFAULT_CONVERSION_FACTOR: f64 = 25.0;

/// Generates a fresh opaque identifier for catalog entries and line items.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
