//! # Notes Errors
//!
//! Failures of a single notes request. These stay inside this crate: the
//! generator converts each one to a fallback string before returning.

use thiserror::Error;

/// Error type for notes generation.
#[derive(Error, Debug)]
pub enum NotesError {
    /// No API key configured.
    #[error("Notes generator not configured: {0}")]
    NotConfigured(String),

    /// Request never got a response (DNS, connect, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status.
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    /// Response body was not the expected JSON.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Model answered without any text.
    #[error("Empty response from model")]
    EmptyResponse,
}

impl From<reqwest::Error> for NotesError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            NotesError::Decode(err.to_string())
        } else {
            NotesError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = NotesError::Api {
            status: 429,
            body: "quota".to_string(),
        };
        assert_eq!(err.to_string(), "API error 429: quota");
        assert_eq!(NotesError::EmptyResponse.to_string(), "Empty response from model");
    }
}
