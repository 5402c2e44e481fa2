//! Integration tests for siege-commands: whole command flows against an
//! in-memory chat platform and provider.

use async_trait::async_trait;
use futures::future::join_all;
use siege_commands::{
    invalid_operator, lookup_failed, usage_error, Dispatcher, InboundMessage, Messenger, Outcome,
    ReplyPayload, ACCENT_COLOR,
};
use siege_common::test_utils::init_test_logging;
use siege_common::{ChannelId, MessageId, Result, SiegeError};
use siege_stats::fixtures::sample_player;
use siege_stats::{PlayerRecord, StatsProvider};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
enum Sent {
    Post(ChannelId, MessageId, ReplyPayload),
    Edit(ChannelId, MessageId, ReplyPayload),
}

/// Records every post and edit, handing out sequential message ids. Clones
/// share the same log.
#[derive(Clone, Default)]
struct RecordingMessenger {
    next_id: Arc<AtomicU64>,
    sent: Arc<Mutex<Vec<Sent>>>,
}

impl RecordingMessenger {
    fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn post(&self, channel: ChannelId, payload: &ReplyPayload) -> Result<MessageId> {
        let id = MessageId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.sent
            .lock()
            .unwrap()
            .push(Sent::Post(channel, id, payload.clone()));
        Ok(id)
    }

    async fn edit(
        &self,
        channel: ChannelId,
        message: MessageId,
        payload: &ReplyPayload,
    ) -> Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push(Sent::Edit(channel, message, payload.clone()));
        Ok(())
    }
}

/// Knows a single player, `ruffbabe`.
struct FixtureProvider;

#[async_trait]
impl StatsProvider for FixtureProvider {
    async fn get_player(
        &self,
        handle: &str,
        _platform: &str,
        _include_operators: bool,
    ) -> Result<PlayerRecord> {
        if handle == "ruffbabe" {
            Ok(sample_player())
        } else {
            Err(SiegeError::player_not_found(handle))
        }
    }
}

fn recording() -> (
    RecordingMessenger,
    Dispatcher<RecordingMessenger, FixtureProvider>,
) {
    init_test_logging();
    let messenger = RecordingMessenger::default();
    let dispatcher = Dispatcher::new(messenger.clone(), FixtureProvider, "!stats", "uplay");
    (messenger, dispatcher)
}

fn message(text: &str, channel: u64) -> InboundMessage {
    InboundMessage {
        text: text.to_string(),
        channel_id: ChannelId(channel),
        message_id: MessageId(1000 + channel),
    }
}

#[tokio::test]
async fn test_summary_edits_the_placeholder_it_posted() {
    let (messenger, dispatcher) = recording();

    let outcome = dispatcher.handle(&message("!stats ruffbabe", 7)).await;
    assert_eq!(outcome, Outcome::Summary);

    let sent = messenger.sent();
    assert_eq!(sent.len(), 2);
    let Sent::Post(channel, placeholder, payload) = &sent[0] else {
        panic!("expected a placeholder post first, got {sent:?}");
    };
    assert_eq!(*channel, ChannelId(7));
    assert_eq!(payload.title, "Loading stats for ruffbabe");

    let Sent::Edit(channel, edited, payload) = &sent[1] else {
        panic!("expected an edit second, got {sent:?}");
    };
    assert_eq!(*channel, ChannelId(7));
    assert_eq!(edited, placeholder);
    assert_eq!(payload.color, ACCENT_COLOR);
    assert_eq!(payload.field("Ranked K/D"), Some("1.234"));
    assert_eq!(payload.field("Favorite Attacker"), Some("Thermite"));
    assert_eq!(payload.field("Favorite Defender"), Some("Jäger"));
    assert_eq!(payload.field("Jäger W/L"), Some("N/A"));
}

#[tokio::test]
async fn test_operator_summary_is_case_insensitive() {
    let (messenger, dispatcher) = recording();

    let outcome = dispatcher.handle(&message("!stats ruffbabe FUZE", 1)).await;
    assert_eq!(outcome, Outcome::OperatorSummary);

    let sent = messenger.sent();
    let Some(Sent::Edit(_, _, payload)) = sent.last() else {
        panic!("expected a final edit, got {sent:?}");
    };
    assert_eq!(payload.title, "Siege Stats for ruffbabe: Fuze");
    let names: Vec<&str> = payload.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Playtime", "K/D", "W/L", "Cluster Charge Kills", "Gadgets Destroyed"]
    );
    assert_eq!(payload.field("Playtime"), Some("2.0"));
    assert_eq!(payload.field("K/D"), Some("2.000"));
    assert_eq!(payload.field("W/L"), Some("3.000"));
    assert_eq!(payload.field("Cluster Charge Kills"), Some("12"));
}

#[tokio::test]
async fn test_each_command_ends_in_exactly_one_terminal_reply() {
    let cases = [
        ("!stats", Outcome::UsageError, usage_error("No player specified")),
        ("!stats nobody", Outcome::LookupFailed, lookup_failed()),
        ("!stats ruffbabe doesnotexist", Outcome::InvalidOperator, invalid_operator()),
    ];

    for (text, expected, terminal) in cases {
        let (messenger, dispatcher) = recording();
        assert_eq!(dispatcher.handle(&message(text, 3)).await, expected, "{text}");

        let sent = messenger.sent();
        let terminal_payload = match sent.last() {
            Some(Sent::Post(_, _, payload) | Sent::Edit(_, _, payload)) => payload,
            None => panic!("nothing sent for {text}"),
        };
        assert_eq!(*terminal_payload, terminal, "{text}");
        let edits = sent.iter().filter(|s| matches!(s, Sent::Edit(..))).count();
        assert!(edits <= 1, "{text} edited {edits} times");
    }
}

#[tokio::test]
async fn test_ordinary_chat_is_ignored() {
    let (messenger, dispatcher) = recording();

    for text in ["gg", "stats please", "!statsruffbabe", ""] {
        assert_eq!(dispatcher.handle(&message(text, 2)).await, Outcome::Ignored);
    }
    assert!(messenger.sent().is_empty());
}

#[tokio::test]
async fn test_concurrent_commands_edit_their_own_placeholders() {
    let (messenger, dispatcher) = recording();
    let messages = [
        message("!stats ruffbabe", 10),
        message("!stats ruffbabe fuze", 20),
        message("!stats nobody", 30),
        message("!stats ruffbabe ash", 40),
    ];

    let outcomes = join_all(messages.iter().map(|m| dispatcher.handle(m))).await;
    assert_eq!(
        outcomes,
        vec![
            Outcome::Summary,
            Outcome::OperatorSummary,
            Outcome::LookupFailed,
            Outcome::OperatorSummary,
        ]
    );

    let sent = messenger.sent();
    let edits: Vec<_> = sent
        .iter()
        .filter_map(|s| match s {
            Sent::Edit(channel, edited, _) => Some((*channel, *edited)),
            Sent::Post(..) => None,
        })
        .collect();
    assert_eq!(edits.len(), messages.len());
    for (channel, edited) in edits {
        let posted_here = sent
            .iter()
            .any(|s| matches!(s, Sent::Post(c, id, _) if *c == channel && *id == edited));
        assert!(posted_here, "edit of {edited} in {channel} has no matching post");
    }
}

#[tokio::test]
async fn test_trigger_is_configurable() {
    init_test_logging();
    let messenger = RecordingMessenger::default();
    let dispatcher = Dispatcher::new(messenger.clone(), FixtureProvider, "?r6", "psn");
    assert_eq!(dispatcher.trigger(), "?r6");

    assert_eq!(
        dispatcher.handle(&message("!stats ruffbabe", 4)).await,
        Outcome::Ignored
    );
    assert_eq!(
        dispatcher.handle(&message("?r6 ruffbabe", 4)).await,
        Outcome::Summary
    );
    assert_eq!(messenger.sent().len(), 2);
}
