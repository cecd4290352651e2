//! OpenRouter provider.
//!
//! Speaks the OpenAI-compatible chat completions format, so it also works
//! against OpenAI, Ollama, and other compatible endpoints.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::error::{CompletionError, status_error};
use super::provider::CompletionProvider;
use super::types::{ChatRequest, ChatResponse, Completion, CompletionRequest};

/// Provider for OpenRouter-style chat completion endpoints.
///
/// Holds only immutable configuration plus a shared [`Client`]; safe to
/// call concurrently.
pub struct OpenRouterProvider {
    client: Client,
    base_url: String,
    api_key: String,
    referer: Option<String>,
    title: Option<String>,
}

impl OpenRouterProvider {
    pub const DEFAULT_BASE_URL: &'static str = "https://openrouter.ai/api/v1";

    #[must_use]
    pub fn new(client: Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
            referer: None,
            title: None,
        }
    }

    /// Set the optional attribution headers (`HTTP-Referer` / `X-Title`).
    ///
    /// OpenRouter uses these for app attribution in its rankings; they
    /// never affect the completion itself.
    #[must_use]
    pub fn with_attribution(mut self, referer: Option<String>, title: Option<String>) -> Self {
        self.referer = referer;
        self.title = title;
        self
    }

    /// Build a POST request with auth and attribution headers.
    fn build_request(&self, url: &str, body: &ChatRequest) -> reqwest::RequestBuilder {
        let mut builder = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key));

        if let Some(ref referer) = self.referer {
            builder = builder.header("HTTP-Referer", referer);
        }
        if let Some(ref title) = self.title {
            builder = builder.header("X-Title", title);
        }

        builder.json(body)
    }
}

#[async_trait]
impl CompletionProvider for OpenRouterProvider {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<Completion, CompletionError> {
        request.validate()?;
        if self.api_key.is_empty() {
            return Err(CompletionError::Auth("no API key configured".to_string()));
        }

        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatRequest::from(request);

        debug!(model = %request.model, "sending completion request");
        let response = self
            .build_request(&url, &body)
            .send()
            .await
            .map_err(CompletionError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "completion request failed");
            return Err(status_error(status.as_u16(), message));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

        let choice = parsed.choices.into_iter().next().ok_or_else(|| {
            CompletionError::MalformedResponse("response contained no choices".to_string())
        })?;

        Ok(Completion {
            text: choice.message.content,
        })
    }
}
