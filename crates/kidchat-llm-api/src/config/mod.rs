/// Default OpenAI API URL
pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default model for the relay
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Replies are kept short
pub const DEFAULT_MAX_TOKENS: u32 = 100;

pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Upper bound on a single completion call, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Normalize API URL by ensuring it has the correct path for OpenAI-compatible endpoints.
///
/// Only the URL path is inspected, so hosts like `chat.example.com` are still
/// treated as bare base URLs.
pub fn normalize_api_url(url: &str) -> String {
    let is_endpoint = match reqwest::Url::parse(url) {
        Ok(parsed) => parsed.path().trim_end_matches('/').ends_with("/completions"),
        Err(_) => url.trim_end_matches('/').ends_with("/completions"),
    };

    if is_endpoint {
        url.to_string()
    } else {
        format!("{}/v1/chat/completions", url.trim_end_matches('/'))
    }
}
