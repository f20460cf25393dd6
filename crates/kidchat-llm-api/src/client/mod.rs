use async_trait::async_trait;
use kidchat_models::{CompletionRequest, CompletionResponse};
use thiserror::Error;

pub mod openai;

/// Failures talking to the completion API
#[derive(Debug, Error)]
pub enum LlmError {
    /// Transport failure, including timeouts
    #[error("Request to completion API failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API request failed: {status} - {message}")]
    Api { status: u16, message: String },

    /// The API answered 2xx but the body was not a completion
    #[error("Invalid completion response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The completion carried no choice or no text
    #[error("No content in response")]
    EmptyResponse,
}

/// LLM client trait - the single seam between the relay and the provider
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Run one non-streaming chat completion.
    ///
    /// The credential is passed per call so that callers can refuse to call at
    /// all when none is configured.
    async fn complete(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, LlmError>;
}
