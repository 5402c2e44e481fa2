//! Default configuration values.

use crate::schema::{DiscordConfig, LoggingSettings, ProviderConfig};

/// Default command trigger.
pub const DEFAULT_TRIGGER: &str = "!stats";

/// Default r6stats API base URL.
pub const DEFAULT_PROVIDER_URL: &str = "https://api.r6stats.com/api/v1";

/// Default platform lookups are made against.
pub const DEFAULT_PLATFORM: &str = "uplay";

/// Default provider request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            trigger: DEFAULT_TRIGGER.to_string(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PROVIDER_URL.to_string(),
            platform: DEFAULT_PLATFORM.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: concat!("siege-stats-bot/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}
