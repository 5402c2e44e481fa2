//! Core bot logic using the Poise framework.

use crate::error::BotResult;
use poise::serenity_prelude as serenity;
use siege_commands::{create_framework, required_intents, Data};
use siege_config::Config;
use siege_stats::R6StatsClient;
use std::sync::Arc;
use tracing::{error, info};

/// Main bot structure.
#[derive(Debug)]
pub struct SiegeBot {
    config: Arc<Config>,
}

impl SiegeBot {
    /// Creates a new bot instance from a validated configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// The configuration the bot runs with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Connects to Discord and handles messages until shutdown.
    pub async fn start(&self) -> BotResult<()> {
        let provider = R6StatsClient::new(&self.config.provider)?;
        let config = Arc::clone(&self.config);

        let framework = create_framework()
            .setup(move |ctx, ready, _framework| {
                info!("Bot connected as: {}", ready.user.name);
                info!(
                    "Listening for '{}' on platform '{}'",
                    config.discord.trigger, config.provider.platform
                );
                let data = Data::new(Arc::clone(&ctx.http), provider, &config);
                Box::pin(async move { Ok(data) })
            })
            .build();

        let mut client =
            serenity::ClientBuilder::new(&self.config.discord.token, required_intents())
                .framework(framework)
                .await?;

        let shard_manager = Arc::clone(&client.shard_manager);
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {:?}", e);
                return;
            }

            info!("Received shutdown signal, starting graceful shutdown");
            shard_manager.shutdown_all().await;
        });

        info!("Siege stats bot is starting up...");
        client.start().await?;

        info!("Siege stats bot has shut down");
        Ok(())
    }
}
