use std::time::Duration;

use async_trait::async_trait;
use kidchat_models::{CompletionRequest, CompletionResponse};
use serde::Deserialize;

use crate::client::{LlmClient, LlmError};
use crate::config::normalize_api_url;

/// OpenAI chat completions client (also works against any compatible server)
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    api_url: String,
    client: reqwest::Client,
}

/// Error envelope used by OpenAI-compatible APIs
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl OpenAiClient {
    /// Build a client whose every request is bounded by `timeout`
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            api_url: normalize_api_url(api_url),
            client,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, LlmError> {
        tracing::debug!(
            url = %self.api_url,
            model = %request.model,
            roles = ?request.messages.iter().map(|m| m.role.as_str()).collect::<Vec<_>>(),
            "sending chat completion request"
        );

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let completion: CompletionResponse = serde_json::from_str(&body)?;
        tracing::debug!(
            choices = completion.choices.len(),
            total_tokens = completion.usage.as_ref().map(|u| u.total_tokens),
            "received chat completion"
        );

        Ok(completion)
    }
}

/// Pull `error.message` out of an error body, or fall back to the raw text
fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) => body.trim().to_string(),
    }
}
