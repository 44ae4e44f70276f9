//! # State Module
//!
//! Focused state types, each requested only by the commands that need it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐  │
//! │  │  WorkspaceState  │  │   NotesState     │  │     AppConfig        │  │
//! │  │                  │  │                  │  │                      │  │
//! │  │  Arc<Mutex<      │  │  generation      │  │  company defaults    │  │
//! │  │    Workspace     │  │  in-flight count │  │  currency, title     │  │
//! │  │  >>              │  │                  │  │  catalog form        │  │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • WorkspaceState: Arc<Mutex<T>> for exclusive access                  │
//! │  • NotesState: atomics, never blocks                                   │
//! │  • AppConfig: Read-only after initialization                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod notes;
mod workspace;

pub use config::AppConfig;
pub use notes::{NotesState, NotesTicket};
pub use workspace::{Action, ActionOutcome, Workspace, WorkspaceState};
