use anyhow::{Context, Result};
use axum::http::HeaderValue;
use colored::Colorize;
use std::net::SocketAddr;
use std::sync::Arc;

use kidchat_llm_api::LlmClient;

use crate::config::RelayConfig;
use crate::web::routes::{build_app, AppState};

/// Web server configuration
pub struct WebServerConfig {
    pub bind_addr: SocketAddr,
    pub allowed_origins: Vec<HeaderValue>,
    pub relay_config: RelayConfig,
}

/// Web server instance
pub struct WebServer {
    config: WebServerConfig,
    client: Arc<dyn LlmClient>,
}

impl WebServer {
    /// Create a new web server
    pub fn new(config: WebServerConfig, client: Arc<dyn LlmClient>) -> Self {
        Self { config, client }
    }

    /// Start the web server and serve until Ctrl-C
    pub async fn start(self) -> Result<()> {
        let WebServerConfig {
            bind_addr,
            allowed_origins,
            relay_config,
        } = self.config;

        if relay_config.api_key().is_none() {
            tracing::warn!("OPENAI_API_KEY is not set; /api/chat will answer 500 until it is configured");
        }

        let origins: Vec<&str> = allowed_origins.iter().filter_map(|o| o.to_str().ok()).collect();
        tracing::info!(model = %relay_config.model, origins = ?origins, "Relay configured");

        let state = AppState::new(relay_config, self.client);
        let app = build_app(state, allowed_origins);

        println!("{} http://{}", "🌈 Kids chat relay starting on".bright_green(), bind_addr);
        println!("   Chat endpoint:   POST http://{}/api/chat", bind_addr);
        println!("   Health endpoint: GET  http://{}/api/health", bind_addr);

        let listener = tokio::net::TcpListener::bind(&bind_addr)
            .await
            .with_context(|| format!("Failed to bind {}", bind_addr))?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
