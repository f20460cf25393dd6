use anyhow::{Context, Result};
use std::sync::Arc;

use kidchat_llm_api::OpenAiClient;

use crate::app::setup::AppConfig;
use crate::web::server::WebServer;

/// Run the web server
pub async fn run_web_server(app_config: AppConfig) -> Result<()> {
    let client = OpenAiClient::new(&app_config.api_url, app_config.timeout)
        .context("Failed to build HTTP client")?;

    tracing::info!(
        api_url = %client.api_url(),
        timeout_secs = app_config.timeout.as_secs(),
        "Completion client ready"
    );

    let server = WebServer::new(app_config.server, Arc::new(client));
    server.start().await
}
