use axum::http::HeaderValue;
use kidchat_llm_api::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use kidchat_models::{CompletionRequest, Message};
use thiserror::Error;

/// System instruction sent ahead of every user message
pub const KID_FRIENDLY_PERSONA: &str = "You are a friendly, enthusiastic AI friend for children. \
    Keep your responses short, positive, and engaging. Use simple language and \
    occasionally include emojis. Be encouraging and playful in your responses.";

/// Frontends allowed to call the API when no allow-list is configured
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "https://frontend-theta-ten-24.vercel.app",
    "http://localhost:3000",
    "https://frontend-j6h7d4fdl-taaha161s-projects.vercel.app",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid CORS origin {0:?}")]
    InvalidOrigin(String),

    #[error("Temperature must be between 0 and 2, got {0}")]
    InvalidTemperature(f32),

    #[error("max_tokens must be greater than zero")]
    InvalidMaxTokens,
}

/// Everything the chat handler needs, built once at startup
#[derive(Clone)]
pub struct RelayConfig {
    api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub persona: String,
}

impl RelayConfig {
    /// Config with the stock model, generation parameters and persona.
    ///
    /// Blank keys count as missing.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            persona: KID_FRIENDLY_PERSONA.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Result<Self, ConfigError> {
        if max_tokens == 0 {
            return Err(ConfigError::InvalidMaxTokens);
        }
        self.max_tokens = max_tokens;
        Ok(self)
    }

    pub fn with_temperature(mut self, temperature: f32) -> Result<Self, ConfigError> {
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ConfigError::InvalidTemperature(temperature));
        }
        self.temperature = temperature;
        Ok(self)
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// The two-turn request sent upstream for one inbound message
    pub fn completion_request(&self, message: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.model.clone(),
            messages: vec![Message::system(self.persona.as_str()), Message::user(message)],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

// Keep the key out of debug output
impl std::fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish_non_exhaustive()
    }
}

/// Turn configured origins into header values, falling back to
/// [`DEFAULT_ALLOWED_ORIGINS`] when none are given
pub fn parse_allowed_origins(origins: &[String]) -> Result<Vec<HeaderValue>, ConfigError> {
    let origins: Vec<&str> = if origins.is_empty() {
        DEFAULT_ALLOWED_ORIGINS.to_vec()
    } else {
        origins.iter().map(|o| o.trim()).filter(|o| !o.is_empty()).collect()
    };

    origins
        .into_iter()
        .map(|origin| {
            let origin = origin.trim_end_matches('/');
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))
        })
        .collect()
}
