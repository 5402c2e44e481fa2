//! Reply composition: every embed the bot sends is built here.

use siege_common::truncate_string;
use siege_stats::{OperatorStats, PlayerRecord};

/// Color of usage, loading and error replies.
pub const NEUTRAL_COLOR: u32 = 2;

/// Color of stats replies.
pub const ACCENT_COLOR: u32 = 10;

/// Title of replies that carry no player data.
pub const GENERIC_TITLE: &str = "Siege Stats";

/// Rendered in place of a ratio whose denominator is zero.
pub const NOT_AVAILABLE: &str = "N/A";

/// Discord caps embeds at 25 fields.
pub const MAX_FIELDS: usize = 25;

/// Discord caps embed titles at 256 characters.
const MAX_TITLE: usize = 256;

/// Discord caps field names at 256 characters.
const MAX_FIELD_NAME: usize = 256;

/// Discord caps field values at 1024 characters.
const MAX_FIELD_VALUE: usize = 1024;

/// One named field of a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyField {
    /// Field name.
    pub name: String,
    /// Field value.
    pub value: String,
    /// Whether the field is laid out inline.
    pub inline: bool,
}

impl ReplyField {
    /// Creates an inline field.
    pub fn inline(name: impl Into<String>, value: impl Into<String>) -> Self {
        let name: String = name.into();
        let value: String = value.into();
        Self {
            name: truncate_string(&name, MAX_FIELD_NAME),
            value: truncate_string(&value, MAX_FIELD_VALUE),
            inline: true,
        }
    }
}

/// A structured reply, posted as a new message or used to edit one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyPayload {
    /// Embed title.
    pub title: String,
    /// Embed color.
    pub color: u32,
    /// Optional description under the title.
    pub description: Option<String>,
    /// Fields in display order.
    pub fields: Vec<ReplyField>,
}

impl ReplyPayload {
    /// Value of the first field called `name`.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }
}

/// Reply for a malformed command or rejected argument.
pub fn usage_error(message: impl Into<String>) -> ReplyPayload {
    ReplyPayload {
        title: GENERIC_TITLE.to_string(),
        color: NEUTRAL_COLOR,
        description: Some(message.into()),
        fields: Vec::new(),
    }
}

/// Placeholder posted while a player is being fetched.
pub fn placeholder(handle: &str) -> ReplyPayload {
    ReplyPayload {
        title: title(&format!("Loading stats for {handle}")),
        color: NEUTRAL_COLOR,
        description: None,
        fields: Vec::new(),
    }
}

/// Replaces the placeholder when the player could not be fetched.
pub fn lookup_failed() -> ReplyPayload {
    ReplyPayload {
        title: "Failed to load player".to_string(),
        color: NEUTRAL_COLOR,
        description: Some("Unable to find player".to_string()),
        fields: Vec::new(),
    }
}

/// Replaces the placeholder when the operator argument matches nothing.
pub fn invalid_operator() -> ReplyPayload {
    usage_error("Invalid operator name")
}

/// Player overview: ranked and casual numbers plus both favorites.
pub fn full_summary(
    player: &PlayerRecord,
    fav_off: &OperatorStats,
    fav_def: &OperatorStats,
) -> ReplyPayload {
    let fields = vec![
        ReplyField::inline(
            "Ranked Playtime",
            format_hours(player.ranked.playtime_seconds),
        ),
        ReplyField::inline("Ranked K/D", format_ratio(player.ranked.kill_death_ratio)),
        ReplyField::inline("Ranked W/L", format_ratio(player.ranked.win_loss_ratio)),
        ReplyField::inline(
            "Casual Playtime",
            format_hours(player.casual.playtime_seconds),
        ),
        ReplyField::inline("Casual K/D", format_ratio(player.casual.kill_death_ratio)),
        ReplyField::inline("Casual W/L", format_ratio(player.casual.win_loss_ratio)),
        ReplyField::inline("Favorite Attacker", fav_off.name.as_str()),
        ReplyField::inline(
            format!("{} K/D", fav_off.name),
            format_optional_ratio(fav_off.kill_death_ratio()),
        ),
        ReplyField::inline(
            format!("{} W/L", fav_off.name),
            format_optional_ratio(fav_off.win_loss_ratio()),
        ),
        ReplyField::inline("Favorite Defender", fav_def.name.as_str()),
        ReplyField::inline(
            format!("{} K/D", fav_def.name),
            format_optional_ratio(fav_def.kill_death_ratio()),
        ),
        ReplyField::inline(
            format!("{} W/L", fav_def.name),
            format_optional_ratio(fav_def.win_loss_ratio()),
        ),
    ];

    ReplyPayload {
        title: title(&format!("Siege Stats for {}", player.username)),
        color: ACCENT_COLOR,
        description: None,
        fields,
    }
}

/// One operator: playtime and ratios followed by its special metrics in
/// ascending key order, cut off at the embed field limit.
pub fn operator_summary(player: &PlayerRecord, operator: &OperatorStats) -> ReplyPayload {
    let base = [
        ReplyField::inline("Playtime", format_hours(operator.playtime_seconds)),
        ReplyField::inline("K/D", format_optional_ratio(operator.kill_death_ratio())),
        ReplyField::inline("W/L", format_optional_ratio(operator.win_loss_ratio())),
    ];
    let specials = operator
        .specials
        .iter()
        .map(|(name, value)| ReplyField::inline(name.as_str(), value.as_str()));

    ReplyPayload {
        title: title(&format!("Siege Stats for {}: {}", player.username, operator.name)),
        color: ACCENT_COLOR,
        description: None,
        fields: base.into_iter().chain(specials).take(MAX_FIELDS).collect(),
    }
}

fn title(text: &str) -> String {
    truncate_string(text, MAX_TITLE)
}

/// Seconds as hours with one decimal.
pub fn format_hours(seconds: f64) -> String {
    if seconds.is_finite() {
        format!("{:.1}", seconds / 3600.0)
    } else {
        NOT_AVAILABLE.to_string()
    }
}

/// A ratio with three decimals.
pub fn format_ratio(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.3}")
    } else {
        NOT_AVAILABLE.to_string()
    }
}

/// A derived ratio with three decimals, `N/A` when it is undefined.
pub fn format_optional_ratio(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), format_ratio)
}
