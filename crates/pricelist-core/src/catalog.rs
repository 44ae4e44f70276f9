//! # Catalog Store
//!
//! Reusable priced packages, pre-defined once and copied into price lists.
//!
//! ## Catalog Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Operations                                   │
//! │                                                                         │
//! │  Editor Action            Store Method            Collection Change     │
//! │  ─────────────            ────────────            ─────────────────     │
//! │                                                                         │
//! │  Fill form ──────────────► CatalogDraft ────────► (staging only)        │
//! │                                                                         │
//! │  Click Add ──────────────► add(draft) ──────────► entries.push(entry)   │
//! │                            (empty name → no-op)                         │
//! │                                                                         │
//! │  Edit a cell ────────────► update(id, field) ───► entries[i].field = v  │
//! │                                                                         │
//! │  Click Delete ───────────► remove(id) ──────────► entries.retain(..)    │
//! │                            (unknown id → no-op)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The package price is never stored: [`CatalogEntry::sub_price`] always
//! recomputes it from the current base price and conversion factor.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::pricing::{coerce_amount, derived_total};
use crate::validation::{validate_label, ValidationResult};
use crate::{new_id, DEFAULT_CONVERSION_FACTOR, DEFAULT_SUB_UNIT_NAME};

// =============================================================================
// Catalog Entry
// =============================================================================

/// A reusable priced package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogEntry {
    /// Unique identifier, assigned on add and never changed.
    id: String,

    /// Display label, e.g. "أرز بسمتي".
    pub name: String,

    /// Label of the sellable package, e.g. "شوال" (sack).
    pub sub_unit_name: String,

    /// Base units (kilograms) in one package.
    pub conversion_factor: f64,

    /// Price per base unit.
    pub price_per_main_unit: f64,
}

impl CatalogEntry {
    /// Returns the immutable identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the package price (`price_per_main_unit × conversion_factor`).
    #[inline]
    pub fn sub_price(&self) -> f64 {
        derived_total(self.price_per_main_unit, self.conversion_factor)
    }
}

// =============================================================================
// Catalog Draft
// =============================================================================

/// Staging record behind the "add to catalog" form.
///
/// ## Defaults
/// A fresh draft offers a sack ("شوال") of 25 kg at price 0, the most
/// common package in the shops this tool targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogDraft {
    pub name: String,
    pub sub_unit_name: String,
    pub conversion_factor: f64,
    pub price_per_main_unit: f64,
}

impl CatalogDraft {
    /// Creates a draft from explicit values.
    pub fn new(
        name: impl Into<String>,
        sub_unit_name: impl Into<String>,
        conversion_factor: f64,
        price_per_main_unit: f64,
    ) -> Self {
        CatalogDraft {
            name: name.into(),
            sub_unit_name: sub_unit_name.into(),
            conversion_factor,
            price_per_main_unit,
        }
    }

    /// Live package price preview shown under the form.
    #[inline]
    pub fn sub_price(&self) -> f64 {
        derived_total(self.price_per_main_unit, self.conversion_factor)
    }

    /// Checks the draft can become an entry (non-empty name).
    pub fn validate(&self) -> ValidationResult<()> {
        validate_label("name", &self.name)
    }

    /// Resets the draft to the form defaults.
    pub fn reset(&mut self) {
        *self = CatalogDraft::default();
    }
}

impl Default for CatalogDraft {
    fn default() -> Self {
        CatalogDraft {
            name: String::new(),
            sub_unit_name: DEFAULT_SUB_UNIT_NAME.to_string(),
            conversion_factor: DEFAULT_CONVERSION_FACTOR,
            price_per_main_unit: 0.0,
        }
    }
}

// =============================================================================
// Catalog Field
// =============================================================================

/// A single-field edit on a catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
#[ts(export)]
pub enum CatalogField {
    Name(String),
    SubUnitName(String),
    ConversionFactor(f64),
    PricePerMainUnit(f64),
}

// =============================================================================
// Catalog Store
// =============================================================================

/// The ordered collection of catalog entries.
///
/// ## Invariants
/// - Insertion order is display order
/// - Every entry has a unique id; names may repeat
/// - Every stored entry has a non-empty name
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogStore {
    entries: Vec<CatalogEntry>,
}

impl CatalogStore {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        CatalogStore {
            entries: Vec::new(),
        }
    }

    /// Appends a new entry built from `draft`.
    ///
    /// ## Returns
    /// - `Some(id)` with the freshly assigned id
    /// - `None` when the name is empty or whitespace (nothing is added)
    pub fn add(&mut self, draft: CatalogDraft) -> Option<String> {
        if draft.validate().is_err() {
            return None;
        }

        let entry = CatalogEntry {
            id: new_id(),
            name: draft.name,
            sub_unit_name: draft.sub_unit_name,
            conversion_factor: coerce_amount(draft.conversion_factor),
            price_per_main_unit: coerce_amount(draft.price_per_main_unit),
        };
        let id = entry.id.clone();
        self.entries.push(entry);
        Some(id)
    }

    /// Edits one field of an entry in place.
    ///
    /// Returns `false` if the id is unknown or the edit would blank the name.
    pub fn update(&mut self, id: &str, field: CatalogField) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            return false;
        };

        match field {
            CatalogField::Name(name) => {
                if validate_label("name", &name).is_err() {
                    return false;
                }
                entry.name = name;
            }
            CatalogField::SubUnitName(unit) => entry.sub_unit_name = unit,
            CatalogField::ConversionFactor(factor) => {
                entry.conversion_factor = coerce_amount(factor)
            }
            CatalogField::PricePerMainUnit(price) => {
                entry.price_per_main_unit = coerce_amount(price)
            }
        }
        true
    }

    /// Removes the entry with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let initial_len = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != initial_len
    }

    /// Looks up an entry by id.
    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Looks up an entry by id, failing with [`CoreError::CatalogEntryNotFound`].
    pub fn require(&self, id: &str) -> CoreResult<&CatalogEntry> {
        self.get(id)
            .ok_or_else(|| CoreError::CatalogEntryNotFound(id.to_string()))
    }

    /// All entries in insertion order.
    pub fn list(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rice() -> CatalogDraft {
        CatalogDraft::new("Rice", "sack", 40.0, 6.0)
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let mut catalog = CatalogStore::new();

        let a = catalog.add(rice()).unwrap();
        let b = catalog.add(rice()).unwrap();

        assert_ne!(a, b);
        assert_eq!(catalog.len(), 2); // duplicate names are allowed
        assert_eq!(catalog.get(&a).unwrap().id(), a);
    }

    #[test]
    fn test_add_rejects_empty_name() {
        let mut catalog = CatalogStore::new();
        catalog.add(rice()).unwrap();
        let before = catalog.list().to_vec();

        assert!(catalog.add(CatalogDraft::new("", "sack", 40.0, 6.0)).is_none());
        assert!(catalog.add(CatalogDraft::new("   ", "sack", 40.0, 6.0)).is_none());

        assert_eq!(catalog.list(), before.as_slice());
    }

    #[test]
    fn test_add_accepts_long_names() {
        let mut catalog = CatalogStore::new();
        let name = "Basmati rice ".repeat(16).trim().to_string();

        let id = catalog
            .add(CatalogDraft::new(name.clone(), "sack", 40.0, 6.0))
            .unwrap();
        assert_eq!(catalog.get(&id).unwrap().name, name);

        let longer = "أرز ".repeat(300);
        assert!(catalog.update(&id, CatalogField::Name(longer.clone())));
        assert_eq!(catalog.get(&id).unwrap().name, longer);
    }

    #[test]
    fn test_sub_price_is_derived() {
        let mut catalog = CatalogStore::new();
        let id = catalog.add(rice()).unwrap();

        assert_eq!(catalog.get(&id).unwrap().sub_price(), 240.0);

        catalog.update(&id, CatalogField::PricePerMainUnit(7.0));
        assert_eq!(catalog.get(&id).unwrap().sub_price(), 280.0);

        catalog.update(&id, CatalogField::ConversionFactor(0.0));
        assert_eq!(catalog.get(&id).unwrap().sub_price(), 0.0);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut catalog = CatalogStore::new();
        catalog.add(rice()).unwrap();
        let before = catalog.list().to_vec();

        assert!(!catalog.update("missing", CatalogField::Name("Sugar".into())));
        assert_eq!(catalog.list(), before.as_slice());
    }

    #[test]
    fn test_update_refuses_blank_name() {
        let mut catalog = CatalogStore::new();
        let id = catalog.add(rice()).unwrap();

        assert!(!catalog.update(&id, CatalogField::Name(" ".into())));
        assert_eq!(catalog.get(&id).unwrap().name, "Rice");
    }

    #[test]
    fn test_remove() {
        let mut catalog = CatalogStore::new();
        let a = catalog.add(rice()).unwrap();
        let b = catalog.add(CatalogDraft::new("Sugar", "sack", 50.0, 3.0)).unwrap();

        assert!(!catalog.remove("missing"));
        assert_eq!(catalog.len(), 2);

        assert!(catalog.remove(&a));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.list()[0].id(), b);
    }

    #[test]
    fn test_require_reports_missing_entry() {
        let catalog = CatalogStore::new();
        let err = catalog.require("inv9").unwrap_err();
        assert_eq!(err.to_string(), "Catalog entry not found: inv9");
    }

    #[test]
    fn test_draft_defaults_and_reset() {
        let mut draft = CatalogDraft::default();
        assert_eq!(draft.sub_unit_name, DEFAULT_SUB_UNIT_NAME);
        assert_eq!(draft.conversion_factor, 25.0);
        assert_eq!(draft.sub_price(), 0.0);

        draft.name = "Lentils".into();
        draft.price_per_main_unit = 8.0;
        assert_eq!(draft.sub_price(), 200.0);

        draft.reset();
        assert_eq!(draft, CatalogDraft::default());
    }

    #[test]
    fn test_add_coerces_invalid_numbers() {
        let mut catalog = CatalogStore::new();
        let id = catalog
            .add(CatalogDraft::new("Oil", "carton", f64::NAN, -2.0))
            .unwrap();

        let entry = catalog.get(&id).unwrap();
        assert_eq!(entry.conversion_factor, 0.0);
        assert_eq!(entry.price_per_main_unit, 0.0);
    }

    #[test]
    fn test_entry_serializes_camel_case() {
        let mut catalog = CatalogStore::new();
        catalog.add(rice()).unwrap();

        let json = serde_json::to_value(&catalog.list()[0]).unwrap();
        assert_eq!(json["subUnitName"], "sack");
        assert_eq!(json["conversionFactor"], 40.0);
        assert_eq!(json["pricePerMainUnit"], 6.0);
    }
}
