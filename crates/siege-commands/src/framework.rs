//! Poise framework setup and gateway event routing.

use crate::dispatcher::{Dispatcher, InboundMessage};
use crate::messenger::SerenityMessenger;
use poise::serenity_prelude as serenity;
use siege_common::{ChannelId, MessageId};
use siege_config::Config;
use siege_stats::R6StatsClient;
use std::sync::Arc;
use tracing::{debug, info};

/// Dispatcher wired to Discord and r6stats.
pub type BotDispatcher = Dispatcher<SerenityMessenger, R6StatsClient>;

/// Application data shared by all event handlers.
pub struct Data {
    /// Routes stats commands to the provider and back.
    pub dispatcher: BotDispatcher,
}

impl Data {
    /// Builds the shared data from an authenticated HTTP client and a provider client.
    pub fn new(http: Arc<serenity::Http>, provider: R6StatsClient, config: &Config) -> Self {
        Self {
            dispatcher: Dispatcher::new(
                SerenityMessenger::new(http),
                provider,
                config.discord.trigger.as_str(),
                config.provider.platform.as_str(),
            ),
        }
    }
}

impl std::fmt::Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Data")
            .field("trigger", &self.dispatcher.trigger())
            .finish_non_exhaustive()
    }
}

/// Application error type for the framework.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Gateway intents needed to read message text in guilds and DMs.
pub fn required_intents() -> serenity::GatewayIntents {
    serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT
}

/// Creates a new Poise framework. Commands arrive as plain messages, so no
/// prefix or slash commands are registered.
pub fn create_framework() -> poise::FrameworkBuilder<Data, Error> {
    poise::Framework::builder().options(poise::FrameworkOptions {
        commands: vec![],
        on_error: |error| Box::pin(on_error(error)),
        event_handler: |ctx, event, framework, data| {
            Box::pin(event_handler(ctx, event, framework, data))
        },
        ..Default::default()
    })
}

/// Converts a gateway message, skipping anything written by a bot.
pub fn inbound_message(message: &serenity::Message) -> Option<InboundMessage> {
    if message.author.bot {
        return None;
    }

    Some(InboundMessage {
        text: message.content.clone(),
        channel_id: ChannelId(message.channel_id.get()),
        message_id: MessageId(message.id.get()),
    })
}

async fn event_handler(
    _ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::Message { new_message } => {
            if let Some(message) = inbound_message(new_message) {
                let outcome = data.dispatcher.handle(&message).await;
                debug!("Message {} handled: {:?}", message.message_id, outcome);
            }
        }
        serenity::FullEvent::Ready { data_about_bot } => {
            info!("Connected as {}", data_about_bot.user.name);
        }
        _ => {}
    }
    Ok(())
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            tracing::error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::EventHandler { error, event, .. } => {
            tracing::error!(
                "Error in event handler for {}: {:?}",
                event.snake_case_name(),
                error
            );
        }
        error => {
            tracing::error!("Other error: {:?}", error);
        }
    }
}
