//! Chat platform seam: posting and editing replies.

use crate::reply::ReplyPayload;
use async_trait::async_trait;
use poise::serenity_prelude as serenity;
use siege_common::{ChannelId, MessageId, Result, SiegeError};
use std::sync::Arc;

/// Sends replies to the chat platform.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Posts `payload` as a new message in `channel`, returning its id.
    async fn post(&self, channel: ChannelId, payload: &ReplyPayload) -> Result<MessageId>;

    /// Replaces the content of a previously posted message.
    async fn edit(&self, channel: ChannelId, message: MessageId, payload: &ReplyPayload) -> Result<()>;
}

/// Discord messenger backed by serenity's HTTP client.
#[derive(Clone)]
pub struct SerenityMessenger {
    http: Arc<serenity::Http>,
}

impl SerenityMessenger {
    /// Creates a messenger over an authenticated HTTP client.
    pub const fn new(http: Arc<serenity::Http>) -> Self {
        Self { http }
    }
}

impl std::fmt::Debug for SerenityMessenger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerenityMessenger")
            .field("http", &"<serenity::Http>")
            .finish()
    }
}

#[async_trait]
impl Messenger for SerenityMessenger {
    async fn post(&self, channel: ChannelId, payload: &ReplyPayload) -> Result<MessageId> {
        let builder = serenity::CreateMessage::new().embed(to_embed(payload));
        let message = serenity::ChannelId::new(channel.0)
            .send_message(&*self.http, builder)
            .await
            .map_err(|e| {
                SiegeError::discord_with_source(format!("Failed to post message in {channel}"), e)
            })?;

        Ok(MessageId(message.id.get()))
    }

    async fn edit(&self, channel: ChannelId, message: MessageId, payload: &ReplyPayload) -> Result<()> {
        let builder = serenity::EditMessage::new().embed(to_embed(payload));
        serenity::ChannelId::new(channel.0)
            .edit_message(&*self.http, serenity::MessageId::new(message.0), builder)
            .await
            .map_err(|e| {
                SiegeError::discord_with_source(
                    format!("Failed to edit message {message} in {channel}"),
                    e,
                )
            })?;

        Ok(())
    }
}

/// Converts a reply into a Discord embed.
pub fn to_embed(payload: &ReplyPayload) -> serenity::CreateEmbed {
    let mut embed = serenity::CreateEmbed::new()
        .title(payload.title.as_str())
        .color(payload.color);
    if let Some(description) = &payload.description {
        embed = embed.description(description.as_str());
    }
    embed.fields(
        payload
            .fields
            .iter()
            .map(|field| (field.name.as_str(), field.value.as_str(), field.inline)),
    )
}
