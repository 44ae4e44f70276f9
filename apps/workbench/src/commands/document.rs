//! # Document Commands
//!
//! Print model for the browser print path, plus a text rendering for
//! terminals and logs.

use tracing::debug;

use pricelist_core::{DocumentModel, DocumentRenderer, PlainTextRenderer};

use crate::error::ApiError;
use crate::state::WorkspaceState;

/// Builds the printable model of the current workspace.
pub fn get_document(state: &WorkspaceState) -> DocumentModel {
    debug!("get_document command");
    state.with_workspace(|ws| DocumentModel::build(&ws.company, ws.ledger.items(), &ws.quotation))
}

/// Renders the current workspace with any renderer.
pub fn render_with<R>(state: &WorkspaceState, renderer: &R) -> Result<R::Output, ApiError>
where
    R: DocumentRenderer,
{
    let document = get_document(state);
    renderer.render(&document).map_err(ApiError::from)
}

/// Renders the current workspace as fixed-width text.
pub fn render_text(state: &WorkspaceState) -> Result<String, ApiError> {
    render_with(state, &PlainTextRenderer::default())
}
