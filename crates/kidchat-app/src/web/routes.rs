use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use kidchat_llm_api::LlmClient;
use kidchat_models::{ChatRequest, ChatResponse, ErrorBody, HealthResponse};

use crate::config::RelayConfig;
use crate::relay::{relay_chat, RelayError};
use crate::web::cors::cors_layer;

/// Application state shared across routes
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub client: Arc<dyn LlmClient>,
}

impl AppState {
    pub fn new(config: RelayConfig, client: Arc<dyn LlmClient>) -> Self {
        Self {
            config: Arc::new(config),
            client,
        }
    }
}

/// Create router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/api/health", get(health))
        .with_state(state)
}

/// Router with the CORS and request tracing layers applied
pub fn build_app(state: AppState, allowed_origins: Vec<HeaderValue>) -> Router {
    create_router(state)
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}

/// POST /api/chat - Relay one message to the completion API
async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload?;
    let response = relay_chat(&state.config, state.client.as_ref(), request).await?;
    Ok(Json(response))
}

/// GET /api/health - Liveness probe
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Error handling
#[derive(Debug)]
enum AppError {
    Relay(RelayError),
    InvalidBody(JsonRejection),
}

impl From<RelayError> for AppError {
    fn from(err: RelayError) -> Self {
        AppError::Relay(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        AppError::InvalidBody(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::Relay(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            AppError::InvalidBody(err) => {
                tracing::warn!(error = %err.body_text(), "Rejected chat request body");
                (StatusCode::UNPROCESSABLE_ENTITY, err.body_text())
            }
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}
