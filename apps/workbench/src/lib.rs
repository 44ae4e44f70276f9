//! # Price List Workbench
//!
//! Editor backend for the price list builder: owns the workspace, applies
//! editor actions, builds the printable document and requests notes.
//!
//! ## Module Organization
//! ```text
//! pricelist_workbench/
//! ├── lib.rs            ◄─── You are here (tracing setup)
//! ├── state/
//! │   ├── mod.rs        ◄─── State type exports
//! │   ├── workspace.rs  ◄─── Workspace, actions, shared handle
//! │   ├── notes.rs      ◄─── Latest-request-wins bookkeeping
//! │   └── config.rs     ◄─── Configuration defaults
//! ├── commands/
//! │   ├── mod.rs        ◄─── Command exports
//! │   ├── workspace.rs  ◄─── dispatch / get_workspace
//! │   ├── document.rs   ◄─── Print model and text rendering
//! │   └── notes.rs      ◄─── AI notes generation
//! ├── bin/preview.rs    ◄─── Terminal preview of a sample price list
//! └── error.rs          ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=pricelist=trace` - Show trace for pricelist crates only
/// - Default: INFO, DEBUG for pricelist crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pricelist=debug,reqwest=warn"));

    // Ignore the error if a subscriber is already installed (tests, embedders).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .try_init();
}
