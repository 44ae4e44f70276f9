//! # Workspace State
//!
//! Everything the editor works on, owned in one place and changed only
//! through [`Action`]s.
//!
//! ## Reducer Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Workspace Operations                                 │
//! │                                                                         │
//! │  Editor Action            Action                  State Change          │
//! │  ─────────────            ──────                  ────────────          │
//! │                                                                         │
//! │  Type in catalog form ───► SetCatalogDraft ─────► catalog_draft = d     │
//! │  Click "Add to catalog" ─► CommitCatalogDraft ──► catalog.add + reset   │
//! │  Delete catalog row ─────► RemoveCatalogEntry ──► catalog.remove        │
//! │                                                                         │
//! │  Pick catalog item ──────► SelectCatalogEntry ──► pending = id          │
//! │  Click "Add selected" ───► AddSelectedEntry ────► ledger copy + clear   │
//! │  Click "New row" ────────► AddBlankItem ────────► ledger.add_blank      │
//! │  Edit a cell ────────────► UpdateItem ──────────► ledger.update         │
//! │  Delete row ─────────────► RemoveItem ──────────► ledger.remove         │
//! │                                                                         │
//! │  Header / company form ──► Set* ────────────────► metadata field        │
//! │                                                                         │
//! │  Every action is one atomic step; no-ops report Unchanged.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use pricelist_core::{
    CatalogDraft, CatalogField, CatalogStore, ClientDetails, CompanyDetails, HeaderLayout,
    LineItem, LineItemField, LineItemLedger, Quotation,
};
use pricelist_notes::NotesContext;

use crate::error::ApiError;
use crate::state::config::AppConfig;

// =============================================================================
// Actions
// =============================================================================

/// A single user-driven change to the workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Action {
    // Catalog
    SetCatalogDraft(CatalogDraft),
    CommitCatalogDraft,
    AddCatalogEntry(CatalogDraft),
    UpdateCatalogEntry { id: String, field: CatalogField },
    RemoveCatalogEntry { id: String },

    // Ledger
    AddBlankItem,
    SelectCatalogEntry { id: Option<String> },
    AddSelectedEntry,
    AddFromCatalog {
        #[serde(rename = "catalogId")]
        catalog_id: String,
    },
    UpdateItem { id: String, field: LineItemField },
    RemoveItem { id: String },

    // Company & client
    SetCompany(CompanyDetails),
    SetLogo(String),
    ClearLogo,
    SetClient(ClientDetails),

    // Quotation metadata
    SetReference(String),
    SetTitle(String),
    SetCurrency(String),
    SetDate(String),
    SetDueDate(String),
    SetTaxRate(f64),
    SetDiscountRate(f64),
    SetHeaderLayout(HeaderLayout),
    SetNotes(String),
}

/// What an action did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ActionOutcome {
    /// A record was created with this id.
    Created { id: String },
    /// State changed in place.
    Changed,
    /// Validation no-op or lookup miss.
    Unchanged,
}

impl ActionOutcome {
    fn from_created(id: Option<String>) -> Self {
        match id {
            Some(id) => ActionOutcome::Created { id },
            None => ActionOutcome::Unchanged,
        }
    }

    fn from_changed(changed: bool) -> Self {
        if changed {
            ActionOutcome::Changed
        } else {
            ActionOutcome::Unchanged
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, ActionOutcome::Unchanged)
    }
}

// =============================================================================
// Workspace
// =============================================================================

/// The complete editable state of one price list session.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub company: CompanyDetails,
    pub client: ClientDetails,
    pub quotation: Quotation,
    pub catalog: CatalogStore,
    pub ledger: LineItemLedger,

    /// Staged "add to catalog" form.
    pub catalog_draft: CatalogDraft,

    /// Catalog entry picked in the editor but not yet added.
    pub pending_selection: Option<String>,

    draft_template: CatalogDraft,
}

impl Workspace {
    /// Creates an empty workspace dated `today`.
    pub fn new(config: &AppConfig, today: NaiveDate) -> Self {
        let mut quotation = Quotation::new_for(today);
        quotation.title = config.title.clone();
        quotation.currency = config.currency.clone();
        quotation.header_layout = config.header_layout;

        Workspace {
            company: config.company.clone(),
            client: ClientDetails::default(),
            quotation,
            catalog: CatalogStore::new(),
            ledger: LineItemLedger::new(),
            catalog_draft: config.catalog_draft(),
            pending_selection: None,
            draft_template: config.catalog_draft(),
        }
    }

    /// Creates a workspace with the demo catalog and two rows.
    pub fn with_sample_data(config: &AppConfig, today: NaiveDate) -> Self {
        let mut workspace = Workspace::new(config, today);

        let samples = [
            ("أرز بسمتي", "شوال", 40.0, 6.0),
            ("سكر ناعم", "شوال", 50.0, 3.0),
            ("عدس أحمر", "كرتونة", 10.0, 8.0),
        ];
        for (name, unit, factor, price) in samples {
            workspace
                .catalog
                .add(CatalogDraft::new(name, unit, factor, price));
        }

        for (name, unit, capacity, price) in &samples[..2] {
            workspace
                .ledger
                .push(LineItem::new(*name, *unit, *capacity, *price));
        }

        workspace
    }

    /// Applies one action.
    ///
    /// ## Returns
    /// - `Ok(outcome)` for every catalog/ledger action, including no-ops
    /// - `Err(ApiError)` only for malformed metadata (e.g. a non-ISO date)
    pub fn apply(&mut self, action: Action) -> Result<ActionOutcome, ApiError> {
        let outcome = match action {
            Action::SetCatalogDraft(draft) => {
                self.catalog_draft = draft;
                ActionOutcome::Changed
            }
            Action::CommitCatalogDraft => {
                let draft = self.catalog_draft.clone();
                let created = self.catalog.add(draft);
                if created.is_some() {
                    self.catalog_draft = self.draft_template.clone();
                }
                ActionOutcome::from_created(created)
            }
            Action::AddCatalogEntry(draft) => ActionOutcome::from_created(self.catalog.add(draft)),
            Action::UpdateCatalogEntry { id, field } => {
                ActionOutcome::from_changed(self.catalog.update(&id, field))
            }
            Action::RemoveCatalogEntry { id } => {
                ActionOutcome::from_changed(self.catalog.remove(&id))
            }

            Action::AddBlankItem => ActionOutcome::Created {
                id: self.ledger.add_blank(),
            },
            Action::SelectCatalogEntry { id } => {
                self.pending_selection = id.filter(|id| !id.is_empty());
                ActionOutcome::Changed
            }
            Action::AddSelectedEntry => {
                let created = self
                    .pending_selection
                    .as_deref()
                    .and_then(|id| self.ledger.add_from_catalog(&self.catalog, id));
                if created.is_some() {
                    self.pending_selection = None;
                }
                ActionOutcome::from_created(created)
            }
            Action::AddFromCatalog { catalog_id } => {
                let created = self.ledger.add_from_catalog(&self.catalog, &catalog_id);
                if created.is_some() {
                    self.pending_selection = None;
                }
                ActionOutcome::from_created(created)
            }
            Action::UpdateItem { id, field } => {
                ActionOutcome::from_changed(self.ledger.update(&id, field))
            }
            Action::RemoveItem { id } => ActionOutcome::from_changed(self.ledger.remove(&id)),

            Action::SetCompany(company) => {
                self.company = company;
                ActionOutcome::Changed
            }
            Action::SetLogo(logo_url) => {
                self.company.set_logo(logo_url);
                ActionOutcome::Changed
            }
            Action::ClearLogo => {
                self.company.clear_logo();
                ActionOutcome::Changed
            }
            Action::SetClient(client) => {
                self.client = client;
                ActionOutcome::Changed
            }

            Action::SetReference(reference) => {
                self.quotation.id = reference;
                ActionOutcome::Changed
            }
            Action::SetTitle(title) => {
                self.quotation.title = title;
                ActionOutcome::Changed
            }
            Action::SetCurrency(currency) => {
                self.quotation.currency = currency;
                ActionOutcome::Changed
            }
            Action::SetDate(date) => {
                self.quotation.set_date(&date)?;
                ActionOutcome::Changed
            }
            Action::SetDueDate(due_date) => {
                self.quotation.set_due_date(&due_date)?;
                ActionOutcome::Changed
            }
            Action::SetTaxRate(rate) => {
                self.quotation.set_tax_rate(rate);
                ActionOutcome::Changed
            }
            Action::SetDiscountRate(rate) => {
                self.quotation.set_discount_rate(rate);
                ActionOutcome::Changed
            }
            Action::SetHeaderLayout(layout) => {
                self.quotation.header_layout = layout;
                ActionOutcome::Changed
            }
            Action::SetNotes(notes) => {
                self.quotation.notes = notes;
                ActionOutcome::Changed
            }
        };

        Ok(outcome)
    }

    /// Snapshot handed to the notes generator.
    pub fn notes_context(&self) -> NotesContext {
        NotesContext {
            company: self.company.clone(),
            client: self.client.clone(),
            items: self.ledger.items().to_vec(),
        }
    }
}

// =============================================================================
// Shared Handle
// =============================================================================

/// Shared, thread-safe handle to the workspace.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Workspace>>`: every action is short and most of them
/// write, so a plain mutex is enough. The lock is never held across an
/// `.await`; the notes command snapshots, releases, and re-locks to write.
#[derive(Debug, Clone)]
pub struct WorkspaceState {
    workspace: Arc<Mutex<Workspace>>,
}

impl WorkspaceState {
    pub fn new(workspace: Workspace) -> Self {
        WorkspaceState {
            workspace: Arc::new(Mutex::new(workspace)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Workspace> {
        // Actions replace whole fields; a poisoned workspace is still consistent.
        self.workspace.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Executes a function with read access to the workspace.
    pub fn with_workspace<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Workspace) -> R,
    {
        let workspace = self.lock();
        f(&workspace)
    }

    /// Executes a function with write access to the workspace.
    pub fn with_workspace_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Workspace) -> R,
    {
        let mut workspace = self.lock();
        f(&mut workspace)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pricelist_core::CoreError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn empty() -> Workspace {
        Workspace::new(&AppConfig::default(), today())
    }

    fn created_id(outcome: ActionOutcome) -> String {
        match outcome {
            ActionOutcome::Created { id } => id,
            other => panic!("expected Created, got {:?}", other),
        }
    }

    #[test]
    fn test_sample_data() {
        let ws = Workspace::with_sample_data(&AppConfig::default(), today());
        assert_eq!(ws.catalog.len(), 3);
        assert_eq!(ws.ledger.len(), 2);
        assert_eq!(ws.ledger.items()[0].sub_price(), 240.0);
        assert_eq!(ws.ledger.items()[1].sub_price(), 150.0);
        assert_eq!(ws.quotation.id, "PL-2025-001");
    }

    #[test]
    fn test_new_workspace_uses_config_layout() {
        let config = AppConfig {
            header_layout: HeaderLayout::Left,
            ..AppConfig::default()
        };
        let ws = Workspace::new(&config, today());
        assert_eq!(ws.quotation.header_layout, HeaderLayout::Left);
    }

    #[test]
    fn test_commit_draft_resets_form() {
        let mut ws = empty();
        ws.apply(Action::SetCatalogDraft(CatalogDraft::new("Rice", "sack", 40.0, 6.0)))
            .unwrap();

        let id = created_id(ws.apply(Action::CommitCatalogDraft).unwrap());

        assert_eq!(ws.catalog.get(&id).unwrap().sub_price(), 240.0);
        assert_eq!(ws.catalog_draft, CatalogDraft::default());
    }

    #[test]
    fn test_commit_empty_draft_is_noop() {
        let mut ws = empty();
        let draft = CatalogDraft::new("", "sack", 40.0, 6.0);
        ws.apply(Action::SetCatalogDraft(draft.clone())).unwrap();

        let outcome = ws.apply(Action::CommitCatalogDraft).unwrap();

        assert!(outcome.is_unchanged());
        assert!(ws.catalog.is_empty());
        assert_eq!(ws.catalog_draft, draft);
    }

    #[test]
    fn test_add_selected_entry_clears_selection() {
        let mut ws = empty();
        let rice = created_id(
            ws.apply(Action::AddCatalogEntry(CatalogDraft::new("Rice", "sack", 40.0, 6.0)))
                .unwrap(),
        );

        ws.apply(Action::SelectCatalogEntry { id: Some(rice) }).unwrap();
        let row = created_id(ws.apply(Action::AddSelectedEntry).unwrap());

        assert_eq!(ws.pending_selection, None);
        let item = ws.ledger.get(&row).unwrap();
        assert_eq!(item.capacity(), 40.0);
        assert_eq!(item.main_price(), 6.0);
        assert_eq!(item.sub_price(), 240.0);
    }

    #[test]
    fn test_add_from_catalog_clears_selection() {
        let mut ws = Workspace::with_sample_data(&AppConfig::default(), today());
        let rice = ws.catalog.list()[0].id().to_string();

        ws.apply(Action::SelectCatalogEntry {
            id: Some(rice.clone()),
        })
        .unwrap();
        ws.apply(Action::AddFromCatalog { catalog_id: rice }).unwrap();

        assert_eq!(ws.pending_selection, None);
        assert_eq!(ws.ledger.len(), 3);
    }

    #[test]
    fn test_add_selected_without_selection_is_noop() {
        let mut ws = empty();
        assert!(ws.apply(Action::AddSelectedEntry).unwrap().is_unchanged());

        ws.apply(Action::SelectCatalogEntry {
            id: Some("missing".into()),
        })
        .unwrap();
        assert!(ws.apply(Action::AddSelectedEntry).unwrap().is_unchanged());
        assert!(ws.ledger.is_empty());
    }

    #[test]
    fn test_lookup_misses_are_unchanged() {
        let mut ws = empty();
        ws.apply(Action::AddBlankItem).unwrap();

        let misses = vec![
            Action::RemoveItem { id: "x".into() },
            Action::UpdateItem {
                id: "x".into(),
                field: LineItemField::MainPrice(3.0),
            },
            Action::RemoveCatalogEntry { id: "x".into() },
            Action::AddFromCatalog {
                catalog_id: "x".into(),
            },
        ];
        for action in misses {
            assert!(ws.apply(action).unwrap().is_unchanged());
        }
        assert_eq!(ws.ledger.len(), 1);
    }

    #[test]
    fn test_bad_date_is_an_error() {
        let mut ws = empty();
        let err = ws.apply(Action::SetDate("March 1st".into())).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ValidationError);
        assert_eq!(ws.quotation.date(), "2025-03-01");

        ws.apply(Action::SetDueDate("2025-04-01".into())).unwrap();
        assert_eq!(ws.quotation.due_date(), "2025-04-01");
    }

    #[test]
    fn test_rates_are_inert() {
        let mut ws = Workspace::with_sample_data(&AppConfig::default(), today());
        let before = ws.ledger.grand_total();

        ws.apply(Action::SetTaxRate(15.0)).unwrap();
        ws.apply(Action::SetDiscountRate(10.0)).unwrap();

        assert_eq!(ws.ledger.grand_total(), before);
        assert_eq!(ws.quotation.tax_rate(), 15.0);
    }

    #[test]
    fn test_action_json_shape() {
        let action: Action = serde_json::from_str(
            r#"{"type":"updateItem","payload":{"id":"1","field":{"field":"mainPrice","value":6}}}"#,
        )
        .unwrap();
        assert_eq!(
            action,
            Action::UpdateItem {
                id: "1".into(),
                field: LineItemField::MainPrice(6.0)
            }
        );

        let action: Action = serde_json::from_str(r#"{"type":"addBlankItem"}"#).unwrap();
        assert_eq!(action, Action::AddBlankItem);
    }

    #[test]
    fn test_shared_state_round_trip() {
        let state = WorkspaceState::new(empty());
        let id = state
            .with_workspace_mut(|ws| ws.apply(Action::AddBlankItem))
            .map(created_id)
            .unwrap();

        let found = state.with_workspace(|ws| ws.ledger.require(&id).map(|i| i.capacity()));
        assert_eq!(found.unwrap(), 1.0);

        let missing = state.with_workspace(|ws| ws.ledger.require("nope").map(|_| ()));
        assert!(matches!(missing, Err(CoreError::LineItemNotFound(_))));
    }
}
