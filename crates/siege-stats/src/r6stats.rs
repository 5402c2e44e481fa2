//! r6stats API client.
//!
//! Talks to the r6stats v1 REST API: one request for the player profile and,
//! when operator detail is wanted, a second one for the operator records.

use crate::model::{ModeStats, OperatorStats, PlayerRecord, Role};
use crate::provider::StatsProvider;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use siege_common::{Result, SiegeError};
use siege_config::ProviderConfig;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// HTTP client for the r6stats API.
#[derive(Debug, Clone)]
pub struct R6StatsClient {
    client: Client,
    base_url: Url,
}

impl R6StatsClient {
    /// Creates a client from the provider configuration.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            SiegeError::config_with_source(format!("Invalid provider URL '{}'", config.base_url), e)
        })?;
        if base_url.cannot_be_a_base() {
            return Err(SiegeError::config(format!(
                "Provider URL '{}' cannot carry a path",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| SiegeError::network_with_source("Failed to create HTTP client", e))?;

        Ok(Self { client, base_url })
    }

    /// Builds `{base}/players/{handle}[/{tail}]?platform={platform}`.
    fn player_url(&self, handle: &str, tail: Option<&str>, platform: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["players", handle]);
            if let Some(tail) = tail {
                segments.push(tail);
            }
        }
        url.query_pairs_mut().append_pair("platform", platform);
        url
    }

    async fn request_json<T: DeserializeOwned>(&self, handle: &str, url: Url) -> Result<T> {
        debug!("Requesting {}", url);

        let response = self.client.get(url).send().await.map_err(network_error)?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(SiegeError::player_not_found(handle));
        }
        if !status.is_success() {
            warn!("Stats provider returned {}", status);
            return Err(SiegeError::provider_with_status(
                format!("API returned {status}"),
                status.as_u16(),
            ));
        }

        let body = response.text().await.map_err(network_error)?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl StatsProvider for R6StatsClient {
    #[instrument(skip(self))]
    async fn get_player(
        &self,
        handle: &str,
        platform: &str,
        include_operators: bool,
    ) -> Result<PlayerRecord> {
        let profile: PlayerEnvelope = self
            .request_json(handle, self.player_url(handle, None, platform))
            .await?;
        let mut player = profile.player.into_record();

        if include_operators {
            let operators: OperatorsEnvelope = self
                .request_json(handle, self.player_url(handle, Some("operators"), platform))
                .await?;
            for record in operators.operator_records {
                player.insert_operator(record.into());
            }
        }

        info!(
            "Loaded player {} with {} operators",
            player.username,
            player.operators.len()
        );
        Ok(player)
    }
}

fn network_error(err: reqwest::Error) -> SiegeError {
    if err.is_timeout() {
        SiegeError::network_with_source("Request timeout", err)
    } else if err.is_connect() {
        SiegeError::network_with_source("Connection failed", err)
    } else if err.is_decode() {
        SiegeError::network_with_source("Failed to read response body", err)
    } else {
        SiegeError::network_with_source("Network request failed", err)
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct PlayerEnvelope {
    player: PlayerDto,
}

#[derive(Debug, Deserialize)]
struct PlayerDto {
    username: String,
    #[serde(default)]
    stats: PlayerStatsDto,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PlayerStatsDto {
    ranked: ModeDto,
    casual: ModeDto,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ModeDto {
    kd: f64,
    wlr: f64,
    playtime: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OperatorsEnvelope {
    operator_records: Vec<OperatorRecordDto>,
}

#[derive(Debug, Deserialize)]
struct OperatorRecordDto {
    #[serde(default)]
    stats: OperatorStatsDto,
    operator: OperatorInfoDto,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OperatorStatsDto {
    wins: u64,
    losses: u64,
    kills: u64,
    deaths: u64,
    playtime: f64,
    specials: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct OperatorInfoDto {
    name: String,
    #[serde(default)]
    role: String,
}

impl PlayerDto {
    fn into_record(self) -> PlayerRecord {
        PlayerRecord::new(
            self.username,
            self.stats.ranked.into(),
            self.stats.casual.into(),
        )
    }
}

impl From<ModeDto> for ModeStats {
    fn from(mode: ModeDto) -> Self {
        Self {
            kill_death_ratio: mode.kd,
            win_loss_ratio: mode.wlr,
            playtime_seconds: mode.playtime,
        }
    }
}

impl From<OperatorRecordDto> for OperatorStats {
    fn from(record: OperatorRecordDto) -> Self {
        let specials = record
            .stats
            .specials
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                (key, value)
            })
            .collect();

        Self {
            name: record.operator.name,
            role: Role::from_code(&record.operator.role),
            playtime_seconds: record.stats.playtime,
            kills: record.stats.kills,
            deaths: record.stats.deaths,
            wins: record.stats.wins,
            losses: record.stats.losses,
            specials,
        }
    }
}
