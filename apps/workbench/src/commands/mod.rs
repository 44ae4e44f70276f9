//! # Commands Module
//!
//! All commands exposed to the editor front end.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── workspace.rs  ◄─── dispatch, get_workspace, lookups
//! ├── document.rs   ◄─── Print model and text rendering
//! └── notes.rs      ◄─── AI notes generation
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the workspace
//! fn dispatch(state: &WorkspaceState, action: Action)
//!
//! // Workspace plus request bookkeeping
//! async fn generate_notes(state: &WorkspaceState, notes: &NotesState, generator: &dyn NotesGenerator)
//! ```

pub mod document;
pub mod notes;
pub mod workspace;
