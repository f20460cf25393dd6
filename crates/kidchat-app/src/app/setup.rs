use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::time::Duration;

use crate::cli::Cli;
use crate::config::{parse_allowed_origins, RelayConfig};
use crate::web::server::WebServerConfig;

/// Application configuration derived from CLI arguments and environment
pub struct AppConfig {
    pub server: WebServerConfig,
    pub api_url: String,
    pub timeout: Duration,
}

/// Set up application configuration from CLI arguments
pub fn setup_from_cli(cli: &Cli) -> Result<AppConfig> {
    let bind_addr: SocketAddr = format!("{}:{}", cli.bind, cli.port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", cli.bind, cli.port))?;

    let relay_config = RelayConfig::new(cli.api_key.clone())
        .with_model(cli.model.clone())
        .with_max_tokens(cli.max_tokens)?
        .with_temperature(cli.temperature)?;

    let allowed_origins = parse_allowed_origins(&cli.allowed_origins)?;

    Ok(AppConfig {
        server: WebServerConfig {
            bind_addr,
            allowed_origins,
            relay_config,
        },
        api_url: cli.api_url.clone(),
        timeout: Duration::from_secs(cli.timeout_secs),
    })
}
