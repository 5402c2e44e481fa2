//! Stats provider trait definition.

use crate::model::PlayerRecord;
use async_trait::async_trait;
use siege_common::Result;

/// Source of player records.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Fetches one player on `platform`, with per-operator detail when
    /// `include_operators` is set.
    ///
    /// Fails with [`siege_common::SiegeError::PlayerNotFound`] for unknown
    /// handles and a network or provider error when the service misbehaves.
    async fn get_player(
        &self,
        handle: &str,
        platform: &str,
        include_operators: bool,
    ) -> Result<PlayerRecord>;
}
