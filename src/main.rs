//! Fabula - AI story client CLI
//!
#![doc = "Fabula - AI story client CLI"]
#![doc = "Main entry point for the Fabula application."]

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fabula::cli::{Cli, Commands};
use fabula::commands;
use fabula::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Chat => {
            tracing::info!("Starting interactive story session");
            commands::chat::run_chat(config).await
        }
        Commands::Generate { prompt, json } => {
            tracing::info!("Starting one-shot generation");
            commands::generate::run_generate(config, prompt, json).await
        }
        Commands::List { query, json } => {
            tracing::info!("Listing stored stories");
            commands::list::run_list(config, query, json).await
        }
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "fabula=debug" } else { "fabula=info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
