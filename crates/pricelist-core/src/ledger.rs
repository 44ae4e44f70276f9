//! # Line Item Ledger
//!
//! The ordered rows of the price list currently being edited.
//!
//! ## Ledger Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Ledger Operations                                    │
//! │                                                                         │
//! │  Editor Action            Ledger Method              Ledger Change      │
//! │  ─────────────            ─────────────              ─────────────      │
//! │                                                                         │
//! │  Click "New row" ────────► add_blank() ─────────────► push(blank)       │
//! │                                                                         │
//! │  Pick from catalog ──────► add_from_catalog(id) ────► push(copy)        │
//! │                            (unknown id → no-op)                         │
//! │                                                                         │
//! │  Edit capacity/price ────► update(id, field) ───────► field = v         │
//! │                                                       sub_price = p × c │
//! │                                                                         │
//! │  Click Delete ───────────► remove(id) ──────────────► retain(..)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Copy-on-select
//! A row picked from the catalog is a value copy taken at that instant, the
//! same way a sale line freezes a product's price. Later catalog edits do
//! not reach rows already on the sheet.

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::catalog::{CatalogEntry, CatalogStore};
use crate::error::{CoreError, CoreResult};
use crate::new_id;
use crate::pricing::{coerce_amount, derived_total};

// =============================================================================
// Line Item
// =============================================================================

/// One row of the price list.
///
/// `sub_price` is read-only: it is rewritten from `main_price × capacity`
/// after every numeric edit and cannot be set directly. Deserializing
/// ignores any incoming `subPrice` and recomputes it.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    id: String,

    /// Item name shown in the table.
    pub name: String,

    /// Package label, e.g. "شوال".
    pub unit: String,

    /// Base units per package for this row.
    capacity: f64,

    /// Price per base unit for this row.
    main_price: f64,

    /// Row total (`main_price × capacity`).
    sub_price: f64,
}

impl LineItem {
    /// Creates a row from explicit values.
    pub fn new(name: impl Into<String>, unit: impl Into<String>, capacity: f64, main_price: f64) -> Self {
        let mut item = LineItem {
            id: new_id(),
            name: name.into(),
            unit: unit.into(),
            capacity: coerce_amount(capacity),
            main_price: coerce_amount(main_price),
            sub_price: 0.0,
        };
        item.recompute();
        item
    }

    /// Creates an empty row: one base unit at price zero.
    pub fn blank() -> Self {
        LineItem::new("", "", 1.0, 0.0)
    }

    /// Copies a catalog entry into a new, independent row.
    pub fn from_catalog(entry: &CatalogEntry) -> Self {
        LineItem::new(
            entry.name.clone(),
            entry.sub_unit_name.clone(),
            entry.conversion_factor,
            entry.price_per_main_unit,
        )
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    #[inline]
    pub fn main_price(&self) -> f64 {
        self.main_price
    }

    #[inline]
    pub fn sub_price(&self) -> f64 {
        self.sub_price
    }

    /// Applies a single-field edit, recomputing the total for numeric fields.
    pub fn apply(&mut self, field: LineItemField) {
        match field {
            LineItemField::Name(name) => self.name = name,
            LineItemField::Unit(unit) => self.unit = unit,
            LineItemField::Capacity(capacity) => {
                self.capacity = coerce_amount(capacity);
                self.recompute();
            }
            LineItemField::MainPrice(price) => {
                self.main_price = coerce_amount(price);
                self.recompute();
            }
        }
    }

    fn recompute(&mut self) {
        self.sub_price = derived_total(self.main_price, self.capacity);
    }
}

/// Incoming shape of a row; the total is never trusted.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LineItemRecord {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    unit: String,
    #[serde(default)]
    capacity: f64,
    #[serde(default)]
    main_price: f64,
}

impl<'de> Deserialize<'de> for LineItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = LineItemRecord::deserialize(deserializer)?;
        let mut item = LineItem::new(record.name, record.unit, record.capacity, record.main_price);
        if !record.id.trim().is_empty() {
            item.id = record.id;
        }
        Ok(item)
    }
}

// =============================================================================
// Line Item Field
// =============================================================================

/// A single-field edit on a line item.
///
/// Package price is derived, so it has no variant here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
#[ts(export)]
pub enum LineItemField {
    Name(String),
    Unit(String),
    Capacity(f64),
    MainPrice(f64),
}

// =============================================================================
// Ledger
// =============================================================================

/// The ordered line items of the current document.
///
/// ## Invariants
/// - Insertion order is display and print order; there is no reordering
/// - Ids are unique; duplicate content is allowed
/// - Every row satisfies `sub_price == main_price × capacity`
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItemLedger {
    items: Vec<LineItem>,
}

impl LineItemLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        LineItemLedger { items: Vec::new() }
    }

    /// Appends a row as-is and returns its id.
    pub fn push(&mut self, item: LineItem) -> String {
        let id = item.id.clone();
        self.items.push(item);
        id
    }

    /// Appends an empty row and returns its id.
    pub fn add_blank(&mut self) -> String {
        self.push(LineItem::blank())
    }

    /// Appends a copy of the catalog entry `catalog_id`.
    ///
    /// Returns `None` (and leaves the ledger untouched) if the catalog has no
    /// such entry.
    pub fn add_from_catalog(&mut self, catalog: &CatalogStore, catalog_id: &str) -> Option<String> {
        let entry = catalog.get(catalog_id)?;
        Some(self.push(LineItem::from_catalog(entry)))
    }

    /// Edits one field of row `id`. Returns `false` if no row matched.
    pub fn update(&mut self, id: &str, field: LineItemField) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.apply(field);
                true
            }
            None => false,
        }
    }

    /// Removes row `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != initial_len
    }

    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Looks up a row by id, failing with [`CoreError::LineItemNotFound`].
    pub fn require(&self, id: &str) -> CoreResult<&LineItem> {
        self.get(id)
            .ok_or_else(|| CoreError::LineItemNotFound(id.to_string()))
    }

    /// All rows in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all row totals.
    ///
    /// Display only: tax and discount rates are not applied.
    pub fn grand_total(&self) -> f64 {
        self.items.iter().map(|i| i.sub_price).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
