//! HTTP client for the suggestion engine
//!
//! Posts the turn history as JSON to `{base}/api/suggestions` and expects an
//! ordered array of `{word, reasoning}` objects back. Any non-success status
//! or shape mismatch is reported as a recoverable [`EngineError`]; dropping
//! the in-flight future tears down the connection, which is how cancellation
//! reaches the wire.

use super::{EngineError, Suggestion, SuggestionEngine};
use crate::core::Turn;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

/// Default engine endpoint (local development worker)
pub const DEFAULT_ENGINE_URL: &str = "http://localhost:8787";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct SuggestionRequest<'a> {
    history: &'a [Turn],
}

/// Suggestion engine reached over HTTP
pub struct HttpSuggestionEngine {
    client: reqwest::Client,
    url: String,
}

impl HttpSuggestionEngine {
    /// Create a client for the engine at `base_url`
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            url: format!("{}/api/suggestions", base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl SuggestionEngine for HttpSuggestionEngine {
    async fn suggest(&self, history: &[Turn]) -> Result<Vec<Suggestion>, EngineError> {
        tracing::debug!(url = %self.url, turns = history.len(), "requesting suggestions");

        let response = self
            .client
            .post(&self.url)
            .json(&SuggestionRequest { history })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "suggestion engine returned non-success");
            return Err(EngineError::Status(status));
        }

        // Parse from text so a shape mismatch is distinguishable from a
        // transport failure.
        let body = response.text().await?;
        let suggestions: Vec<Suggestion> =
            serde_json::from_str(&body).map_err(|e| EngineError::Malformed(e.to_string()))?;

        tracing::debug!(count = suggestions.len(), "suggestions received");
        Ok(suggestions)
    }
}
