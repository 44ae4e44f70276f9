//! # Workspace Commands
//!
//! The editor talks to the workspace through two calls: `dispatch` to
//! change it, `get_workspace` to redraw.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Editor                                                                 │
//! │     │                                                                   │
//! │     │ dispatch({ type: "updateItem",                                    │
//! │     │            payload: { id, field: { field: "capacity", value } } })│
//! │     ▼                                                                   │
//! │  Workspace::apply ───► ActionOutcome ───► editor                        │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                                     get_workspace() ──► WorkspaceResponse│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use pricelist_core::{
    CatalogDraft, CatalogEntry, ClientDetails, CompanyDetails, LineItem, Quotation,
};

use crate::error::ApiError;
use crate::state::{Action, ActionOutcome, Workspace, WorkspaceState};

/// A catalog entry plus its derived package price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntryView {
    #[serde(flatten)]
    pub entry: CatalogEntry,
    pub sub_price: f64,
}

impl From<&CatalogEntry> for CatalogEntryView {
    fn from(entry: &CatalogEntry) -> Self {
        CatalogEntryView {
            entry: entry.clone(),
            sub_price: entry.sub_price(),
        }
    }
}

/// Everything the editor draws.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceResponse {
    pub company: CompanyDetails,
    pub client: ClientDetails,
    pub quotation: Quotation,
    pub catalog: Vec<CatalogEntryView>,
    pub items: Vec<LineItem>,
    pub grand_total: f64,
    pub catalog_draft: CatalogDraft,
    /// Live package price under the catalog form.
    pub draft_sub_price: f64,
    pub pending_selection: Option<String>,
}

impl From<&Workspace> for WorkspaceResponse {
    fn from(ws: &Workspace) -> Self {
        WorkspaceResponse {
            company: ws.company.clone(),
            client: ws.client.clone(),
            quotation: ws.quotation.clone(),
            catalog: ws.catalog.iter().map(CatalogEntryView::from).collect(),
            items: ws.ledger.items().to_vec(),
            grand_total: ws.ledger.grand_total(),
            catalog_draft: ws.catalog_draft.clone(),
            draft_sub_price: ws.catalog_draft.sub_price(),
            pending_selection: ws.pending_selection.clone(),
        }
    }
}

/// Applies one editor action.
///
/// ## Returns
/// - `Created { id }` when a catalog entry or row was added
/// - `Changed` when state changed in place
/// - `Unchanged` for empty names and unknown ids
/// - `Err` only for malformed metadata such as a non-ISO date
pub fn dispatch(state: &WorkspaceState, action: Action) -> Result<ActionOutcome, ApiError> {
    debug!(?action, "dispatch command");

    let outcome = state.with_workspace_mut(|ws| ws.apply(action));

    match &outcome {
        Ok(ActionOutcome::Unchanged) => debug!("Action left workspace unchanged"),
        Ok(_) => {}
        Err(err) => warn!(error = %err, "Action rejected"),
    }

    outcome
}

/// Applies a JSON-encoded action, as sent by the web editor.
pub fn dispatch_json(state: &WorkspaceState, payload: &str) -> Result<ActionOutcome, ApiError> {
    let action: Action = serde_json::from_str(payload)
        .map_err(|e| ApiError::validation(format!("Malformed action: {}", e)))?;
    dispatch(state, action)
}

/// Gets the full workspace for display.
pub fn get_workspace(state: &WorkspaceState) -> WorkspaceResponse {
    debug!("get_workspace command");
    state.with_workspace(|ws| WorkspaceResponse::from(ws))
}

/// Gets one catalog entry by id.
pub fn get_catalog_entry(state: &WorkspaceState, id: &str) -> Result<CatalogEntryView, ApiError> {
    debug!(id = %id, "get_catalog_entry command");
    state.with_workspace(|ws| {
        ws.catalog
            .require(id)
            .map(CatalogEntryView::from)
            .map_err(ApiError::from)
    })
}

/// Gets one line item by id.
pub fn get_line_item(state: &WorkspaceState, id: &str) -> Result<LineItem, ApiError> {
    debug!(id = %id, "get_line_item command");
    state.with_workspace(|ws| ws.ledger.require(id).cloned().map_err(ApiError::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::AppConfig;
    use chrono::NaiveDate;
    use pricelist_core::{CatalogField, LineItemField};

    fn state() -> WorkspaceState {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        WorkspaceState::new(Workspace::new(&AppConfig::default(), today))
    }

    fn created(outcome: Result<ActionOutcome, ApiError>) -> String {
        match outcome.unwrap() {
            ActionOutcome::Created { id } => id,
            other => panic!("expected Created, got {:?}", other),
        }
    }

    #[test]
    fn test_copy_on_select_is_independent() {
        let state = state();
        let rice = created(dispatch(
            &state,
            Action::AddCatalogEntry(CatalogDraft::new("Rice", "sack", 40.0, 6.0)),
        ));
        let row = created(dispatch(
            &state,
            Action::AddFromCatalog {
                catalog_id: rice.clone(),
            },
        ));

        // Editing the catalog does not touch the existing row.
        dispatch(
            &state,
            Action::UpdateCatalogEntry {
                id: rice.clone(),
                field: CatalogField::PricePerMainUnit(7.0),
            },
        )
        .unwrap();
        assert_eq!(get_line_item(&state, &row).unwrap().sub_price(), 240.0);
        assert_eq!(get_catalog_entry(&state, &rice).unwrap().sub_price, 280.0);

        // Editing the row does not touch the catalog.
        dispatch(
            &state,
            Action::UpdateItem {
                id: row.clone(),
                field: LineItemField::Capacity(50.0),
            },
        )
        .unwrap();
        assert_eq!(get_line_item(&state, &row).unwrap().sub_price(), 300.0);
        assert_eq!(get_catalog_entry(&state, &rice).unwrap().entry.conversion_factor, 40.0);

        // Removing the catalog entry keeps the row.
        dispatch(&state, Action::RemoveCatalogEntry { id: rice }).unwrap();
        assert_eq!(get_workspace(&state).items.len(), 1);
    }

    #[test]
    fn test_workspace_response_totals() {
        let state = state();
        dispatch(
            &state,
            Action::AddCatalogEntry(CatalogDraft::new("Rice", "sack", 40.0, 6.0)),
        )
        .unwrap();
        let row = created(dispatch(&state, Action::AddBlankItem));
        dispatch(
            &state,
            Action::UpdateItem {
                id: row,
                field: LineItemField::MainPrice(12.5),
            },
        )
        .unwrap();

        let response = get_workspace(&state);
        assert_eq!(response.catalog[0].sub_price, 240.0);
        assert_eq!(response.grand_total, 12.5);
        assert_eq!(response.draft_sub_price, 0.0);
    }

    #[test]
    fn test_response_json_shape() {
        let state = state();
        dispatch(
            &state,
            Action::AddCatalogEntry(CatalogDraft::new("Rice", "sack", 40.0, 6.0)),
        )
        .unwrap();

        let json = serde_json::to_value(get_workspace(&state)).unwrap();
        assert_eq!(json["catalog"][0]["name"], "Rice");
        assert_eq!(json["catalog"][0]["subPrice"], 240.0);
        assert_eq!(json["catalogDraft"]["subUnitName"], "شوال");
        assert!(json["pendingSelection"].is_null());
    }

    #[test]
    fn test_dispatch_json() {
        let state = state();
        let outcome = dispatch_json(&state, r#"{"type":"setTitle","payload":"Wholesale"}"#);
        assert_eq!(outcome.unwrap(), ActionOutcome::Changed);
        assert_eq!(get_workspace(&state).quotation.title, "Wholesale");

        let err = dispatch_json(&state, r#"{"type":"launchRocket"}"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_missing_lookups() {
        let state = state();
        let err = get_catalog_entry(&state, "nope").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(get_line_item(&state, "nope").is_err());
    }
}
