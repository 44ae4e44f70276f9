//! # Notes Commands
//!
//! AI-written "notes and terms" for the current price list.
//!
//! ## Request Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. begin()            ticket N, indicator on                           │
//! │  2. snapshot           company + client + items, lock released          │
//! │  3. generate().await   never fails; fallback text on any error          │
//! │  4. is_current(N)?     yes ─► write quotation.notes ─► Applied          │
//! │                        no  ─► drop text ─────────────► Superseded       │
//! │  5. finish()           indicator off once nothing is in flight          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use pricelist_notes::NotesGenerator;

use crate::state::{NotesState, WorkspaceState};

/// Result of a notes request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum NotesOutcome {
    /// The text was written into the quotation notes.
    Applied { notes: String },
    /// A newer request started first; the text was discarded.
    Superseded,
}

/// Generates notes for the current workspace and stores them.
///
/// Whatever the notes field held before is replaced, including text the
/// user typed. Fallback messages are stored the same way as real output.
pub async fn generate_notes(
    state: &WorkspaceState,
    notes: &NotesState,
    generator: &dyn NotesGenerator,
) -> NotesOutcome {
    let ticket = notes.begin();
    let context = state.with_workspace(|ws| ws.notes_context());
    debug!(?ticket, item_count = context.items.len(), "generate_notes command");

    let text = generator.generate(&context).await;

    let outcome = if notes.is_current(ticket) {
        state.with_workspace_mut(|ws| ws.quotation.notes = text.clone());
        info!(length = text.chars().count(), "Notes applied");
        NotesOutcome::Applied { notes: text }
    } else {
        debug!(?ticket, "Discarding notes from superseded request");
        NotesOutcome::Superseded
    };

    notes.finish(ticket);
    outcome
}

/// True while any notes request is in flight.
pub fn is_generating_notes(notes: &NotesState) -> bool {
    notes.is_generating()
}
