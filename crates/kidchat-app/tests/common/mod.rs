#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, Response};
use axum::Router;
use kidchat::{build_app, AppState, RelayConfig};
use kidchat_llm_api::{LlmClient, LlmError};
use kidchat_models::{Choice, ChoiceMessage, CompletionRequest, CompletionResponse};
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_API_KEY: &str = "sk-test";
pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// What the stub completion API does when called
pub enum StubBehavior {
    Echo(String),
    Fail(String),
}

/// Stand-in completion client that records every call
pub struct StubClient {
    behavior: StubBehavior,
    calls: Mutex<Vec<(String, CompletionRequest)>>,
}

impl StubClient {
    pub fn echoing(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            behavior: StubBehavior::Echo(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            behavior: StubBehavior::Fail(message.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<(String, CompletionRequest)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for StubClient {
    async fn complete(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((api_key.to_string(), request.clone()));

        match &self.behavior {
            StubBehavior::Echo(reply) => Ok(CompletionResponse {
                choices: vec![Choice {
                    index: 0,
                    message: ChoiceMessage {
                        role: Some("assistant".to_string()),
                        content: Some(reply.clone()),
                    },
                    finish_reason: Some("stop".to_string()),
                }],
                ..Default::default()
            }),
            StubBehavior::Fail(message) => Err(LlmError::Api {
                status: 500,
                message: message.clone(),
            }),
        }
    }
}

/// App wired to `client`, using the default origin allow-list
pub fn test_app(api_key: Option<&str>, client: Arc<StubClient>) -> Router {
    let config = RelayConfig::new(api_key.map(str::to_string));
    let origins = kidchat::config::parse_allowed_origins(&[]).unwrap();
    build_app(AppState::new(config, client), origins)
}

pub fn chat_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
