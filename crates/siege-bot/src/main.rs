//! Main entry point for the Siege stats bot.

use anyhow::{Context, Result};
use clap::Parser;
use siege_bot::{logging_config, Args, SiegeBot};
use siege_common::logging::init_logging;
use std::env;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = match args.resolve_config(|var| env::var(var).ok()) {
        Ok(config) => config,
        Err(e) => {
            let _guard = init_logging(&args.fallback_logging());
            error!("Invalid configuration: {}", e);
            return Err(e).context("Failed to load configuration");
        }
    };

    let _guard = init_logging(&logging_config(&config.logging))
        .context("Failed to initialize logging")?;

    info!("Starting Siege stats bot");

    let bot = SiegeBot::new(config);
    if let Err(e) = bot.start().await {
        error!("Bot stopped with an error: {}", e);
        return Err(e).context("Discord client failed");
    }

    Ok(())
}
