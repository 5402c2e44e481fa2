//! Player record as returned by the stats provider.

use serde::{Deserialize, Serialize};
use siege_common::title_case;
use std::collections::BTreeMap;
use std::fmt;

/// Side an operator plays on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Attacking operator (`atk`).
    Attack,
    /// Defending operator (`def`).
    Defense,
    /// Any role code the provider reports that is neither of the above.
    Other(String),
}

impl Role {
    /// Maps a provider role code onto a role.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "atk" => Self::Attack,
            "def" => Self::Defense,
            _ => Self::Other(code.to_string()),
        }
    }

    /// Provider role code.
    pub fn as_code(&self) -> &str {
        match self {
            Self::Attack => "atk",
            Self::Defense => "def",
            Self::Other(code) => code,
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Aggregate statistics for one game mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ModeStats {
    /// Kill/death ratio as reported by the provider.
    pub kill_death_ratio: f64,
    /// Win/loss ratio as reported by the provider.
    pub win_loss_ratio: f64,
    /// Time played in seconds.
    pub playtime_seconds: f64,
}

/// Per-operator statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperatorStats {
    /// Display name as reported by the provider.
    pub name: String,
    /// Attack or defense.
    pub role: Role,
    /// Time played in seconds.
    pub playtime_seconds: f64,
    /// Total kills.
    pub kills: u64,
    /// Total deaths, may be zero.
    pub deaths: u64,
    /// Rounds won.
    pub wins: u64,
    /// Rounds lost, may be zero.
    pub losses: u64,
    /// Operator specific metrics keyed by metric name.
    pub specials: BTreeMap<String, String>,
}

impl OperatorStats {
    /// An operator with no recorded play, used when a player lacks a default favorite.
    pub fn baseline(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            ..Self::default()
        }
    }
}

/// One player's statistics, immutable once fetched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Account name on the platform.
    pub username: String,
    /// Ranked playlist statistics.
    pub ranked: ModeStats,
    /// Casual playlist statistics.
    pub casual: ModeStats,
    /// Operators keyed by title-cased name.
    pub operators: BTreeMap<String, OperatorStats>,
}

impl PlayerRecord {
    /// Creates a record without any operator detail.
    pub fn new(username: impl Into<String>, ranked: ModeStats, casual: ModeStats) -> Self {
        Self {
            username: username.into(),
            ranked,
            casual,
            operators: BTreeMap::new(),
        }
    }

    /// Adds an operator, keyed by its title-cased name.
    #[must_use]
    pub fn with_operator(mut self, operator: OperatorStats) -> Self {
        self.insert_operator(operator);
        self
    }

    /// Inserts an operator, keyed by its title-cased name.
    pub fn insert_operator(&mut self, operator: OperatorStats) {
        self.operators.insert(title_case(&operator.name), operator);
    }

    /// Looks up an operator by name in any casing.
    pub fn operator(&self, name: &str) -> Option<&OperatorStats> {
        self.operators.get(&title_case(name))
    }
}
