use kidchat_llm_api::{LlmClient, LlmError};
use kidchat_logging::preview;
use kidchat_models::{ChatRequest, ChatResponse};
use thiserror::Error;

use crate::config::RelayConfig;

/// The one way a chat relay can fail. The message is what the caller sees.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("OpenAI API key not configured")]
    MissingApiKey,

    #[error("{0}")]
    Upstream(String),
}

impl From<LlmError> for RelayError {
    fn from(err: LlmError) -> Self {
        RelayError::Upstream(err.to_string())
    }
}

/// Forward one chat message to the completion API and return its reply.
///
/// Fails fast with [`RelayError::MissingApiKey`] before any outbound call when
/// no credential is configured. Nothing is retried.
pub async fn relay_chat(
    config: &RelayConfig,
    client: &dyn LlmClient,
    request: ChatRequest,
) -> Result<ChatResponse, RelayError> {
    tracing::info!(preview = %preview(&request.message), "Received chat message");

    let result = forward(config, client, &request.message).await;
    if let Err(err) = &result {
        tracing::error!(error = %err, "Chat relay failed");
    }
    result
}

async fn forward(
    config: &RelayConfig,
    client: &dyn LlmClient,
    message: &str,
) -> Result<ChatResponse, RelayError> {
    let api_key = config.api_key().ok_or(RelayError::MissingApiKey)?;

    let completion_request = config.completion_request(message);

    tracing::info!(model = %completion_request.model, "Sending request to completion API");
    let completion = client.complete(api_key, &completion_request).await?;

    let content = completion.first_content().ok_or(LlmError::EmptyResponse)?;
    tracing::info!(chars = content.chars().count(), "Received response from completion API");

    Ok(ChatResponse {
        response: content.to_string(),
    })
}
