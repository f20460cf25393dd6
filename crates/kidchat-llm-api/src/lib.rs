//! # kidchat-llm-api
//!
//! Client for OpenAI-compatible chat completion endpoints.
//!
//! The relay only ever talks to the completion API through the [`LlmClient`]
//! trait, so tests and alternative backends can be substituted without
//! touching the handler.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use kidchat_llm_api::{LlmClient, OpenAiClient, OPENAI_API_URL};
//! use kidchat_models::{CompletionRequest, Message};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OpenAiClient::new(OPENAI_API_URL, Duration::from_secs(30))?;
//!
//!     let request = CompletionRequest {
//!         model: "gpt-3.5-turbo".to_string(),
//!         messages: vec![Message::user("Hello!")],
//!         max_tokens: 100,
//!         temperature: 0.7,
//!     };
//!
//!     let response = client.complete("your-api-key", &request).await?;
//!     println!("Response: {:?}", response.first_content());
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;


// Re-export commonly used types
pub use client::{openai::OpenAiClient, LlmClient, LlmError};

pub use config::{
    normalize_api_url,
    DEFAULT_MAX_TOKENS,
    DEFAULT_MODEL,
    DEFAULT_TEMPERATURE,
    DEFAULT_TIMEOUT_SECS,
    OPENAI_API_URL,
};
