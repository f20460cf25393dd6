use std::time::Duration;

use serde_json::json;
use wiremock::matchers::*;
use wiremock::{Mock, MockServer, ResponseTemplate};

use kidchat_models::{CompletionRequest, Message};

pub const TEST_API_KEY: &str = "test-api-key";
pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Mock server utilities for testing the completion client
pub struct LLMMockServer {
    server: MockServer,
}

impl LLMMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// Mock successful OpenAI API response for a given user turn
    pub async fn mock_openai_success(&self, request_content: &str, response_content: &str) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .and(header("authorization", "Bearer test-api-key"))
            .and(body_partial_json(json!({
                "model": "gpt-3.5-turbo",
                "messages": [
                    {"role": "system", "content": "Be kind."},
                    {"role": "user", "content": request_content}
                ],
                "max_tokens": 100
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl_test123",
                "object": "chat.completion",
                "created": 1700000000,
                "model": "gpt-3.5-turbo",
                "choices": [{
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": response_content
                    },
                    "finish_reason": "stop"
                }],
                "usage": {
                    "prompt_tokens": 10,
                    "completion_tokens": 20,
                    "total_tokens": 30
                }
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock OpenAI API error response
    pub async fn mock_openai_error(&self, status: u16, error_type: &str, error_message: &str) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": {
                    "message": error_message,
                    "type": error_type,
                    "param": null,
                    "code": null
                }
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a 2xx reply with an arbitrary body
    pub async fn mock_raw_body(&self, body: &str) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Mock a reply that arrives after `delay`
    pub async fn mock_slow(&self, delay: Duration) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"choices": []}))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }
}

/// Test data generators for completion client testing
pub mod test_data {
    use super::*;

    pub fn create_sample_request(content: &str) -> CompletionRequest {
        CompletionRequest {
            model: "gpt-3.5-turbo".to_string(),
            messages: vec![Message::system("Be kind."), Message::user(content)],
            max_tokens: 100,
            temperature: 0.7,
        }
    }
}
