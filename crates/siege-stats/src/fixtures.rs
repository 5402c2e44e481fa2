//! Player fixtures for tests in this and downstream crates.

use crate::model::{ModeStats, OperatorStats, PlayerRecord, Role};
use std::collections::BTreeMap;

/// Builds an operator with the given counters.
#[allow(clippy::too_many_arguments)]
pub fn operator(
    name: &str,
    role: Role,
    playtime_seconds: f64,
    kills: u64,
    deaths: u64,
    wins: u64,
    losses: u64,
) -> OperatorStats {
    OperatorStats {
        name: name.to_string(),
        role,
        playtime_seconds,
        kills,
        deaths,
        wins,
        losses,
        specials: BTreeMap::new(),
    }
}

/// A player with ranked K/D 1.234, a handful of operators, and Fuze at
/// exactly two hours of playtime with two special metrics.
pub fn sample_player() -> PlayerRecord {
    let ranked = ModeStats {
        kill_death_ratio: 1.234,
        win_loss_ratio: 1.2,
        playtime_seconds: 360_000.0,
    };
    let casual = ModeStats {
        kill_death_ratio: 0.987_65,
        win_loss_ratio: 1.0,
        playtime_seconds: 90_000.0,
    };

    let mut fuze = operator("Fuze", Role::Attack, 7_200.0, 80, 40, 30, 10);
    fuze.specials
        .insert("Cluster Charge Kills".to_string(), "12".to_string());
    fuze.specials
        .insert("Gadgets Destroyed".to_string(), "3".to_string());

    PlayerRecord::new("ruffbabe", ranked, casual)
        .with_operator(fuze)
        .with_operator(operator("Ash", Role::Attack, 3_600.0, 50, 25, 20, 20))
        .with_operator(operator("Thermite", Role::Attack, 36_000.0, 300, 200, 90, 60))
        .with_operator(operator("Frost", Role::Defense, 1_000.0, 10, 10, 5, 5))
        .with_operator(operator("Jäger", Role::Defense, 20_000.0, 120, 0, 40, 0))
}
