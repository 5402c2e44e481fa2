//! Pure stat derivation: ratios and favorite operator selection.

use crate::model::{OperatorStats, PlayerRecord, Role};
use std::borrow::Cow;

/// Starting attack candidate when picking a favorite.
pub const DEFAULT_ATTACKER: &str = "Ash";

/// Starting defense candidate when picking a favorite.
pub const DEFAULT_DEFENDER: &str = "Frost";

/// Divides `numerator` by `denominator`.
///
/// Returns `None` when the denominator is zero instead of an infinite or NaN value.
#[allow(clippy::cast_precision_loss)]
pub fn ratio(numerator: u64, denominator: u64) -> Option<f64> {
    (denominator != 0).then(|| numerator as f64 / denominator as f64)
}

impl OperatorStats {
    /// Kills per death, `None` without deaths.
    pub fn kill_death_ratio(&self) -> Option<f64> {
        ratio(self.kills, self.deaths)
    }

    /// Wins per loss, `None` without losses.
    pub fn win_loss_ratio(&self) -> Option<f64> {
        ratio(self.wins, self.losses)
    }
}

/// A player's most played operator on each side.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorites<'a> {
    /// Most played attacker.
    pub attack: Cow<'a, OperatorStats>,
    /// Most played defender.
    pub defense: Cow<'a, OperatorStats>,
}

/// Picks the most played attacker and defender.
///
/// Candidates start at Ash and Frost (a zero-playtime baseline if the player
/// has no record of them) and are only replaced by strictly greater playtime,
/// scanning operators in ascending name order.
pub fn favorite_operators(player: &PlayerRecord) -> Favorites<'_> {
    let mut attack = starting_candidate(player, DEFAULT_ATTACKER, Role::Attack);
    let mut defense = starting_candidate(player, DEFAULT_DEFENDER, Role::Defense);

    for operator in player.operators.values() {
        let current = match operator.role {
            Role::Attack => &mut attack,
            Role::Defense => &mut defense,
            Role::Other(_) => continue,
        };
        if operator.playtime_seconds > current.playtime_seconds {
            *current = Cow::Borrowed(operator);
        }
    }

    Favorites { attack, defense }
}

fn starting_candidate<'a>(player: &'a PlayerRecord, name: &str, role: Role) -> Cow<'a, OperatorStats> {
    player.operator(name).map_or_else(
        || Cow::Owned(OperatorStats::baseline(name, role)),
        Cow::Borrowed,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operator(name: &str, role: Role, playtime_seconds: f64) -> OperatorStats {
        OperatorStats {
            name: name.to_string(),
            role,
            playtime_seconds,
            ..OperatorStats::default()
        }
    }

    #[test]
    fn test_ratio() {
        assert_eq!(ratio(10, 4), Some(2.5));
        assert_eq!(ratio(0, 3), Some(0.0));
    }

    #[test]
    fn test_ratio_zero_denominator_is_none() {
        assert_eq!(ratio(12, 0), None);
        assert_eq!(ratio(0, 0), None);
    }

    #[test]
    fn test_operator_ratios() {
        let op = OperatorStats {
            kills: 30,
            deaths: 20,
            wins: 5,
            losses: 0,
            ..OperatorStats::default()
        };
        assert_eq!(op.kill_death_ratio(), Some(1.5));
        assert_eq!(op.win_loss_ratio(), None);
    }

    #[test]
    fn test_greater_playtime_wins() {
        let player = PlayerRecord::default()
            .with_operator(operator("Ash", Role::Attack, 10.0))
            .with_operator(operator("Thermite", Role::Attack, 100.0))
            .with_operator(operator("Sledge", Role::Attack, 200.0))
            .with_operator(operator("Frost", Role::Defense, 50.0))
            .with_operator(operator("Bandit", Role::Defense, 40.0));

        let favorites = favorite_operators(&player);
        assert_eq!(favorites.attack.name, "Sledge");
        assert_eq!(favorites.defense.name, "Frost");
    }

    #[test]
    fn test_ties_keep_default_candidate() {
        let player = PlayerRecord::default()
            .with_operator(operator("Ash", Role::Attack, 300.0))
            .with_operator(operator("Buck", Role::Attack, 300.0))
            .with_operator(operator("Frost", Role::Defense, 300.0))
            .with_operator(operator("Doc", Role::Defense, 300.0));

        let favorites = favorite_operators(&player);
        assert_eq!(favorites.attack.name, "Ash");
        assert_eq!(favorites.defense.name, "Frost");
    }

    #[test]
    fn test_ties_between_others_keep_first_by_name() {
        let player = PlayerRecord::default()
            .with_operator(operator("Zofia", Role::Attack, 300.0))
            .with_operator(operator("Buck", Role::Attack, 300.0));

        assert_eq!(favorite_operators(&player).attack.name, "Buck");
    }

    #[test]
    fn test_missing_defaults_act_as_zero_baseline() {
        let empty = PlayerRecord::default();
        let favorites = favorite_operators(&empty);
        assert_eq!(favorites.attack.name, DEFAULT_ATTACKER);
        assert_eq!(favorites.attack.role, Role::Attack);
        assert_eq!(favorites.defense.name, DEFAULT_DEFENDER);
        assert!(matches!(favorites.defense, Cow::Owned(_)));

        let player = PlayerRecord::default().with_operator(operator("Mute", Role::Defense, 1.0));
        assert_eq!(favorite_operators(&player).defense.name, "Mute");
    }

    #[test]
    fn test_other_roles_are_ignored() {
        let player = PlayerRecord::default()
            .with_operator(operator("Recruit", Role::Other("recruit".to_string()), 9_999.0));

        let favorites = favorite_operators(&player);
        assert_eq!(favorites.attack.name, DEFAULT_ATTACKER);
        assert_eq!(favorites.defense.name, DEFAULT_DEFENDER);
    }
}
