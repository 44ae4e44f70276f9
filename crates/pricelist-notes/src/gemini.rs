//! Gemini notes generator.
//!
//! Calls `models/{model}:generateContent` once per request. No retries, no
//! streaming; the whole response is taken as the notes text.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::config::NotesConfig;
use crate::error::NotesError;
use crate::generator::{
    NotesContext, NotesGenerator, EMPTY_RESPONSE_FALLBACK, ERROR_FALLBACK, MISSING_KEY_FALLBACK,
};
use crate::prompt::build_prompt;

/// Notes generator backed by the Gemini API.
pub struct GeminiNotesGenerator {
    config: NotesConfig,
    client: Client,
}

impl GeminiNotesGenerator {
    /// Creates a generator from `config`.
    ///
    /// Falls back to a client without a timeout if the configured client
    /// cannot be built.
    pub fn new(config: NotesConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Falling back to default HTTP client");
                Client::new()
            });

        Self { config, client }
    }

    /// Creates a generator from environment variables.
    pub fn from_env() -> Self {
        Self::new(NotesConfig::from_env())
    }

    pub fn config(&self) -> &NotesConfig {
        &self.config
    }

    /// Build the API URL for the given model and method.
    fn api_url(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{}",
            self.config.api_base, self.config.model, method
        )
    }

    /// Performs the request, surfacing every failure as a [`NotesError`].
    pub async fn try_generate(&self, context: &NotesContext) -> Result<String, NotesError> {
        let api_key = self.config.api_key().ok_or_else(|| {
            NotesError::NotConfigured("API_KEY is not set".to_string())
        })?;

        let prompt = build_prompt(context);
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: Some(prompt) }],
            }],
        };

        debug!(
            model = %self.config.model,
            item_count = context.items.len(),
            "Sending notes request to Gemini API"
        );

        let response = self
            .client
            .post(self.api_url("generateContent"))
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotesError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| NotesError::Decode(e.to_string()))?;

        api_response.text().ok_or(NotesError::EmptyResponse)
    }
}

#[async_trait]
impl NotesGenerator for GeminiNotesGenerator {
    async fn generate(&self, context: &NotesContext) -> String {
        match self.try_generate(context).await {
            Ok(text) => text,
            Err(NotesError::NotConfigured(reason)) => {
                warn!(%reason, "Notes generator not configured");
                MISSING_KEY_FALLBACK.to_string()
            }
            Err(NotesError::EmptyResponse) => {
                warn!("Gemini returned no text, using default notes");
                EMPTY_RESPONSE_FALLBACK.to_string()
            }
            Err(err) => {
                error!(error = %err, "Error generating notes");
                ERROR_FALLBACK.to_string()
            }
        }
    }
}

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, if non-blank.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pricelist_core::LineItem;
    use std::time::Duration;

    fn context() -> NotesContext {
        let mut context = NotesContext::default();
        context.company.name = "Al Noor Trading".to_string();
        context.items = vec![LineItem::new("Rice", "sack", 40.0, 6.0)];
        context
    }

    #[test]
    fn test_api_url() {
        let generator = GeminiNotesGenerator::new(NotesConfig::default());
        assert_eq!(
            generator.api_url("generateContent"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_response_text_extraction() {
        let body = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "الأسعار "}, {"text": "سارية"}]},
                 "finishReason": "STOP"}
            ],
            "usageMetadata": {"promptTokenCount": 10}
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.text().as_deref(), Some("الأسعار سارية"));
    }

    #[test]
    fn test_response_without_text() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.text(), None);

        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert_eq!(response.text(), None);

        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{"text":"  "}]}}]}"#)
                .unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn test_request_serialization() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some("hi".to_string()),
                }],
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hi");
    }

    #[tokio::test]
    async fn test_missing_key_returns_instructional_fallback() {
        let generator = GeminiNotesGenerator::new(NotesConfig::default());

        assert!(matches!(
            generator.try_generate(&context()).await,
            Err(NotesError::NotConfigured(_))
        ));
        assert_eq!(generator.generate(&context()).await, MISSING_KEY_FALLBACK);
    }

    #[tokio::test]
    async fn test_call_failure_returns_error_fallback() {
        // Nothing listens on port 9 of localhost; the connect fails fast.
        let config = NotesConfig {
            api_key: Some("test-key".to_string()),
            api_base: "http://127.0.0.1:9/v1beta".to_string(),
            timeout: Duration::from_secs(5),
            ..NotesConfig::default()
        };
        let generator = GeminiNotesGenerator::new(config);

        assert!(matches!(
            generator.try_generate(&context()).await,
            Err(NotesError::Network(_))
        ));
        assert_eq!(generator.generate(&context()).await, ERROR_FALLBACK);
    }
}
