use anyhow::Result;
use clap::Parser;

use kidchat::app::{run_web_server, setup_from_cli};
use kidchat::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    kidchat_logging::init_tracing(cli.json_logs);

    let app_config = setup_from_cli(&cli)?;
    run_web_server(app_config).await
}
