//! Prints a sample price list to the terminal.
//!
//! ```text
//! PRICELIST_COMPANY_NAME="Al Noor" API_KEY=... cargo run --bin pricelist-preview
//! ```
//!
//! Notes are requested only when an API key is configured.

use chrono::Local;
use tracing::{error, info};

use pricelist_notes::{GeminiNotesGenerator, NotesConfig};
use pricelist_workbench::commands::{document, notes};
use pricelist_workbench::init_tracing;
use pricelist_workbench::state::{AppConfig, NotesState, Workspace, WorkspaceState};

#[tokio::main]
async fn main() {
    init_tracing();

    let config = AppConfig::from_env();
    let today = Local::now().date_naive();
    let state = WorkspaceState::new(Workspace::with_sample_data(&config, today));
    info!(company = %config.company.name, "Sample workspace ready");

    let notes_config = NotesConfig::from_env();
    if notes_config.api_key().is_some() {
        let generator = GeminiNotesGenerator::new(notes_config);
        let outcome = notes::generate_notes(&state, &NotesState::new(), &generator).await;
        info!(?outcome, "Notes request finished");
    } else {
        info!("No API key configured, skipping notes");
    }

    match document::render_text(&state) {
        Ok(text) => println!("{}", text),
        Err(err) => {
            error!(error = %err, "Could not render price list");
            std::process::exit(1);
        }
    }
}
