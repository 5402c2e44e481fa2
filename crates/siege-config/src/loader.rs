//! Configuration loading from YAML files and environment variables.

use crate::schema::Config;
use siege_common::SiegeError;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_VAR: &str = "SIEGE_CONFIG_PATH";

/// Configuration files looked for in the working directory, in order.
const DEFAULT_CONFIG_FILES: [&str; 2] = ["config.yaml", "config.yml"];

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading the configuration file.
    #[error("Failed to read configuration file '{path}': {source}")]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error.
    #[error("Failed to parse YAML configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Environment variable parsing error.
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParse {
        /// Offending variable.
        var: String,
        /// Parse failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration failed validation.
    #[error(transparent)]
    Invalid(#[from] SiegeError),
}

impl From<ConfigError> for SiegeError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Invalid(inner) => inner,
            other => Self::config_with_source("Failed to load configuration", other),
        }
    }
}

/// Configuration loader for the application.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration, applies environment overrides and validates it.
    ///
    /// The file is taken from `explicit`, then `SIEGE_CONFIG_PATH`, then
    /// `config.yaml`/`config.yml` in the working directory. Without any file
    /// the defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        let lookup = |var: &str| env::var(var).ok();
        let mut config = Self::load_unvalidated(explicit, &lookup)?;
        Self::apply_overrides(&mut config, &lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration without validating it, so that late overrides
    /// such as a command line token can still be applied by the caller.
    /// `SIEGE_CONFIG_PATH` is read through `lookup`.
    pub fn load_unvalidated<F>(explicit: Option<&Path>, lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match Self::resolve_path(explicit, lookup) {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                Self::load_from_file(&path)
            }
            None => {
                debug!("No configuration file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Parses a YAML configuration file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(content: &str) -> Result<Config, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Applies environment overrides read through `lookup`.
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup("DISCORD_TOKEN") {
            config.discord.token = token;
        }

        if let Some(trigger) = lookup("SIEGE_TRIGGER") {
            config.discord.trigger = trigger;
        }

        if let Some(url) = lookup("R6STATS_URL") {
            config.provider.base_url = url;
        }

        if let Some(platform) = lookup("R6STATS_PLATFORM") {
            config.provider.platform = platform;
        }

        if let Some(timeout) = lookup("R6STATS_TIMEOUT") {
            config.provider.timeout_seconds =
                timeout.trim().parse().map_err(|e| ConfigError::EnvParse {
                    var: "R6STATS_TIMEOUT".to_string(),
                    source: Box::new(e),
                })?;
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }

    fn resolve_path<F>(explicit: Option<&Path>, lookup: F) -> Option<PathBuf>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        if let Some(path) = lookup(CONFIG_PATH_VAR) {
            return Some(PathBuf::from(path));
        }

        DEFAULT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }
}
