//! Application-wide error types using thiserror.

use poise::serenity_prelude as serenity;
use siege_common::SiegeError;
use siege_config::ConfigError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum BotError {
    /// Configuration or startup error.
    #[error("Configuration error: {0}")]
    Config(#[from] SiegeError),

    /// Discord/Serenity error.
    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),
}

impl From<ConfigError> for BotError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.into())
    }
}

/// Result type for the bot application.
pub type BotResult<T> = Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_keeps_validation_details() {
        let err: BotError = ConfigError::Invalid(SiegeError::validation_field(
            "Discord token is required",
            "discord.token",
        ))
        .into();

        assert!(matches!(
            err,
            BotError::Config(SiegeError::Validation { ref field, .. }) if field.as_deref() == Some("discord.token")
        ));
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_provider_setup_error_is_a_config_error() {
        let err: BotError = SiegeError::config("Invalid provider URL 'x'").into();
        assert!(matches!(err, BotError::Config(SiegeError::Config { .. })));
        assert!(err.to_string().contains("Invalid provider URL 'x'"));
    }
}
