//! Command dispatch: placeholder, fetch, and one terminal edit per command.

use crate::command::{Command, CommandInvocation};
use crate::messenger::Messenger;
use crate::reply::{self, ReplyPayload};
use siege_common::{ChannelId, MessageId};
use siege_stats::{favorite_operators, StatsProvider};
use tracing::{debug, error, info, instrument, trace, warn};

/// An inbound chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    /// Raw message text.
    pub text: String,
    /// Channel the message was sent in.
    pub channel_id: ChannelId,
    /// Id of the message itself.
    pub message_id: MessageId,
}

/// What handling a message amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The message did not carry the trigger.
    Ignored,
    /// The trigger came without a handle and a usage reply was posted.
    UsageError,
    /// The placeholder now shows the player summary.
    Summary,
    /// The placeholder now shows a single operator.
    OperatorSummary,
    /// The player has no operator by the requested name.
    InvalidOperator,
    /// The player could not be fetched.
    LookupFailed,
    /// Posting or editing on the chat platform failed.
    TransportFailed,
}

/// Routes stats commands from chat messages to the stats provider and back.
#[derive(Debug)]
pub struct Dispatcher<M, P> {
    messenger: M,
    provider: P,
    trigger: String,
    platform: String,
}

impl<M, P> Dispatcher<M, P>
where
    M: Messenger,
    P: StatsProvider,
{
    /// Creates a dispatcher reacting to `trigger` and looking players up on `platform`.
    pub fn new(
        messenger: M,
        provider: P,
        trigger: impl Into<String>,
        platform: impl Into<String>,
    ) -> Self {
        Self {
            messenger,
            provider,
            trigger: trigger.into(),
            platform: platform.into(),
        }
    }

    /// The token that activates the command.
    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    /// Handles one inbound message. Errors never escape: they end up in the
    /// reply, in the logs, or both.
    pub async fn handle(&self, message: &InboundMessage) -> Outcome {
        let Some(invocation) = CommandInvocation::parse(&message.text, &self.trigger) else {
            trace!("Ignoring message {}", message.message_id);
            return Outcome::Ignored;
        };

        match invocation.command() {
            Command::MissingHandle => self.reply_usage(message.channel_id).await,
            Command::Summary { handle } => self.lookup(message, handle, None).await,
            Command::Operator { handle, operator } => {
                self.lookup(message, handle, Some(operator)).await
            }
        }
    }

    async fn reply_usage(&self, channel: ChannelId) -> Outcome {
        match self
            .messenger
            .post(channel, &reply::usage_error("No player specified"))
            .await
        {
            Ok(_) => Outcome::UsageError,
            Err(e) => {
                error!("Failed to post usage reply in {}: {}", channel, e);
                Outcome::TransportFailed
            }
        }
    }

    #[instrument(
        skip(self, message),
        fields(channel = %message.channel_id, message = %message.message_id)
    )]
    async fn lookup(
        &self,
        message: &InboundMessage,
        handle: &str,
        operator: Option<&str>,
    ) -> Outcome {
        let channel = message.channel_id;

        let placeholder = match self.messenger.post(channel, &reply::placeholder(handle)).await {
            Ok(id) => id,
            Err(e) => {
                error!("Failed to post placeholder: {}", e);
                return Outcome::TransportFailed;
            }
        };

        let (payload, outcome) = self.compose(handle, operator).await;

        if let Err(e) = self.messenger.edit(channel, placeholder, &payload).await {
            error!("Failed to edit placeholder {}: {}", placeholder, e);
            return Outcome::TransportFailed;
        }

        outcome
    }

    async fn compose(&self, handle: &str, operator: Option<&str>) -> (ReplyPayload, Outcome) {
        let player = match self.provider.get_player(handle, &self.platform, true).await {
            Ok(player) => player,
            Err(e) => {
                warn!("Failed to load player {}: {}", handle, e);
                return (reply::lookup_failed(), Outcome::LookupFailed);
            }
        };

        match operator {
            None => {
                let favorites = favorite_operators(&player);
                info!("Sending summary for {}", player.username);
                (
                    reply::full_summary(&player, &favorites.attack, &favorites.defense),
                    Outcome::Summary,
                )
            }
            Some(name) => match player.operator(name) {
                Some(stats) => {
                    info!("Sending {} summary for {}", stats.name, player.username);
                    (
                        reply::operator_summary(&player, stats),
                        Outcome::OperatorSummary,
                    )
                }
                None => {
                    debug!("Player {} has no operator named {}", player.username, name);
                    (reply::invalid_operator(), Outcome::InvalidOperator)
                }
            },
        }
    }
}
