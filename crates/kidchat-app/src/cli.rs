use clap::Parser;

use kidchat_llm_api::{
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT_SECS, OPENAI_API_URL,
};

/// CLI arguments for the kids chat relay
#[derive(Parser, Debug)]
#[command(name = "kidchat-server")]
#[command(about = "Kids Chat API - relays chat messages to an LLM with a kid-friendly persona")]
#[command(version)]
pub struct Cli {
    /// API key for the completion API. Without it the server still starts,
    /// but every chat request fails with 500.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Chat completions endpoint (bare hosts get /v1/chat/completions appended)
    #[arg(long, env = "OPENAI_API_URL", default_value = OPENAI_API_URL)]
    pub api_url: String,

    /// Model name sent with every completion request
    #[arg(long, env = "KIDCHAT_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Maximum tokens per reply
    #[arg(long, env = "KIDCHAT_MAX_TOKENS", default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,

    /// Sampling temperature (0-2)
    #[arg(long, env = "KIDCHAT_TEMPERATURE", default_value_t = DEFAULT_TEMPERATURE)]
    pub temperature: f32,

    /// Timeout for a single completion call, in seconds
    #[arg(long, env = "KIDCHAT_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Address to bind
    #[arg(long, env = "KIDCHAT_BIND", default_value = "0.0.0.0")]
    pub bind: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Origin allowed to call the API from a browser (repeatable).
    /// Defaults to the production and local frontends.
    #[arg(long = "allowed-origin", env = "KIDCHAT_ALLOWED_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Vec<String>,

    /// Emit logs as JSON lines
    #[arg(long, env = "KIDCHAT_JSON_LOGS")]
    pub json_logs: bool,
}
