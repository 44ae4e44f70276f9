//! # pricelist-notes: AI-written notes for price lists
//!
//! A price list ends with a short "notes & terms" paragraph (prices subject
//! to change, validity period, thanks). This crate writes it with Gemini.
//!
//! ## Module Organization
//! ```text
//! pricelist_notes/
//! ├── lib.rs          ◄─── You are here (re-exports)
//! ├── generator.rs    ◄─── NotesGenerator trait, NotesContext, fallbacks
//! ├── gemini.rs       ◄─── Gemini generateContent client
//! ├── prompt.rs       ◄─── Arabic prompt builder
//! ├── config.rs       ◄─── NotesConfig (env driven)
//! └── error.rs        ◄─── NotesError (internal, never surfaced)
//! ```
//!
//! ## Failure Model
//! Callers never see an error. [`NotesGenerator::generate`] always returns
//! text: either the model output or one of the fixed fallbacks in
//! [`generator`]. Failures are logged with `tracing` at the boundary.

pub mod config;
pub mod error;
pub mod gemini;
pub mod generator;
pub mod prompt;

pub use config::NotesConfig;
pub use error::NotesError;
pub use gemini::GeminiNotesGenerator;
pub use generator::{
    NotesContext, NotesGenerator, EMPTY_RESPONSE_FALLBACK, ERROR_FALLBACK, MISSING_KEY_FALLBACK,
};
