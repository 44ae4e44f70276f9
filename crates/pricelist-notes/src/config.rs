//! # Notes Configuration
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables
//! 2. Defaults (this file)
//!
//! ## Environment Variables
//! - `API_KEY`: Gemini API key (falls back to `VITE_API_KEY`, the name the
//!   web build exposes)
//! - `PRICELIST_NOTES_MODEL`: model name (default `gemini-2.5-flash`)
//! - `PRICELIST_NOTES_API_BASE`: API base URL
//! - `PRICELIST_NOTES_TIMEOUT_SECS`: HTTP timeout in seconds (default 120)

use std::time::Duration;

/// Gemini API base URL.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used for notes.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default HTTP timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Notes generator configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct NotesConfig {
    /// `None` (or blank) means "not configured": requests short-circuit to
    /// the instructional fallback.
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub timeout: Duration,
}

impl Default for NotesConfig {
    fn default() -> Self {
        NotesConfig {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl NotesConfig {
    /// Creates a config with the given key and defaults for the rest.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        NotesConfig {
            api_key: Some(api_key.into()),
            ..NotesConfig::default()
        }
    }

    /// Creates a NotesConfig from environment variables and defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from any variable source (env, test map).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = NotesConfig {
            api_key: ["API_KEY", "VITE_API_KEY"]
                .iter()
                .filter_map(|name| lookup(name))
                .find(|key| !key.trim().is_empty()),
            ..NotesConfig::default()
        };

        if let Some(model) = lookup("PRICELIST_NOTES_MODEL").filter(|m| !m.trim().is_empty()) {
            config.model = model;
        }

        if let Some(base) = lookup("PRICELIST_NOTES_API_BASE").filter(|b| !b.trim().is_empty()) {
            config.api_base = base.trim_end_matches('/').to_string();
        }

        if let Some(secs) = lookup("PRICELIST_NOTES_TIMEOUT_SECS").and_then(|s| s.parse::<u64>().ok()) {
            config.timeout = Duration::from_secs(secs);
        }

        config
    }

    /// The usable API key, if any.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}
