//! Runtime validation of a loaded configuration.

use crate::schema::Config;
use siege_common::{Result, SiegeError};

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    pub fn validate(config: &Config) -> Result<()> {
        config.validate()
    }
}

impl Config {
    /// Validates the configuration, reporting the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.discord.token.trim().is_empty() {
            return Err(SiegeError::validation_field(
                "Discord token cannot be empty",
                "discord.token",
            ));
        }

        if self.discord.trigger.is_empty() {
            return Err(SiegeError::validation_field(
                "Command trigger cannot be empty",
                "discord.trigger",
            ));
        }

        if self.discord.trigger.chars().any(char::is_whitespace) {
            return Err(SiegeError::validation_field(
                "Command trigger must be a single token",
                "discord.trigger",
            ));
        }

        if self.provider.platform.trim().is_empty() {
            return Err(SiegeError::validation_field(
                "Provider platform cannot be empty",
                "provider.platform",
            ));
        }

        if self.provider.timeout_seconds == 0 {
            return Err(SiegeError::validation_field(
                "Provider timeout must be greater than 0",
                "provider.timeout_seconds",
            ));
        }

        let url = url::Url::parse(&self.provider.base_url).map_err(|e| {
            SiegeError::validation_field(format!("Invalid provider URL: {e}"), "provider.base_url")
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SiegeError::validation_field(
                "Provider URL must use http or https",
                "provider.base_url",
            ));
        }

        Ok(())
    }
}
