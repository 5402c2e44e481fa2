//! Command line arguments and configuration resolution.

use crate::error::BotResult;
use clap::Parser;
use siege_common::logging::LoggingConfig;
use siege_config::{Config, ConfigLoader, LoggingSettings};
use std::path::PathBuf;

/// Command line arguments
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Discord bot token, overrides the configuration file and `DISCORD_TOKEN`
    #[arg(short, long)]
    pub token: Option<String>,

    /// Configuration file path, overrides `SIEGE_CONFIG_PATH`
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level or filter directive
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl Args {
    /// Loads the configuration file, then applies environment overrides read
    /// through `lookup`, then these arguments, and validates the result.
    pub fn resolve_config<F>(&self, lookup: F) -> BotResult<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigLoader::load_unvalidated(self.config.as_deref(), &lookup)?;
        ConfigLoader::apply_overrides(&mut config, &lookup)?;
        self.apply_to(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Applies the command line overrides to `config`.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(token) = &self.token {
            config.discord.token.clone_from(token);
        }
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
        if self.json_logs {
            config.logging.json = true;
        }
    }

    /// Logging setup used before a configuration could be loaded.
    pub fn fallback_logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self
                .log_level
                .clone()
                .unwrap_or_else(|| LoggingConfig::default().level),
            json_format: self.json_logs,
            ..LoggingConfig::default()
        }
    }
}

/// Maps the configured logging settings onto the subscriber setup.
pub fn logging_config(settings: &LoggingSettings) -> LoggingConfig {
    LoggingConfig {
        level: settings.level.clone(),
        json_format: settings.json,
        file_path: settings.file.clone(),
        ..LoggingConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_and_long_flags() {
        let args = Args::try_parse_from(["siege-bot", "-t", "abc", "-l", "debug", "--json-logs"]).unwrap();
        assert_eq!(args.token.as_deref(), Some("abc"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.json_logs);

        let args = Args::try_parse_from(["siege-bot", "--token", "xyz"]).unwrap();
        assert_eq!(args.token.as_deref(), Some("xyz"));
        assert!(!args.json_logs);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["siege-bot", "--verbose"]).is_err());
    }

    #[test]
    fn test_apply_to_overrides_only_given_values() {
        let mut config = Config::default();
        config.discord.token = "from-file".to_string();
        config.logging.level = "warn".to_string();

        Args {
            token: Some("from-cli".to_string()),
            ..Args::default()
        }
        .apply_to(&mut config);

        assert_eq!(config.discord.token, "from-cli");
        assert_eq!(config.logging.level, "warn");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_logging_config_mapping() {
        let settings = LoggingSettings {
            level: "siege_commands=trace".to_string(),
            json: true,
            file: Some("logs/bot.log".to_string()),
        };
        let logging = logging_config(&settings);

        assert_eq!(logging.level, "siege_commands=trace");
        assert!(logging.json_format);
        assert_eq!(logging.file_path.as_deref(), Some("logs/bot.log"));
    }

    #[test]
    fn test_fallback_logging_defaults_to_info() {
        assert_eq!(Args::default().fallback_logging().level, "info");
    }
}
