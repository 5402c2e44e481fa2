//! Structured logging infrastructure built on `tracing-subscriber`.

use crate::error::{Result, SiegeError};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

/// Configuration for the logging system.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "siege_commands=trace").
    pub level: String,
    /// Whether to emit JSON lines instead of human readable output.
    pub json_format: bool,
    /// Optional file path for log output. Stdout is used when unset.
    pub file_path: Option<String>,
    /// Whether to include target module information.
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            file_path: None,
            include_targets: true,
        }
    }
}

impl LoggingConfig {
    /// Builds the filter. `RUST_LOG` wins over the configured level.
    fn env_filter(&self) -> Result<EnvFilter> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        EnvFilter::try_new(&self.level)
            .map_err(|e| SiegeError::config_with_source(format!("Invalid log level '{}'", self.level), e))
    }
}

/// Initialize the global tracing subscriber.
///
/// When logging to a file the returned guard must be kept alive for the
/// lifetime of the process, dropping it flushes and stops the writer thread.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = config.env_filter()?;

    let (layer, guard): (Box<dyn Layer<Registry> + Send + Sync>, Option<WorkerGuard>) =
        match &config.file_path {
            Some(file_path) => {
                let path = Path::new(file_path);
                let directory = path.parent().unwrap_or_else(|| Path::new("."));
                let file_name = path
                    .file_name()
                    .ok_or_else(|| SiegeError::validation_field("Log file path has no file name", "logging.file"))?;
                let appender = tracing_appender::rolling::never(directory, file_name);
                let (writer, guard) = tracing_appender::non_blocking(appender);

                let layer = fmt::layer()
                    .with_ansi(false)
                    .with_target(config.include_targets)
                    .with_writer(writer);
                let layer = if config.json_format {
                    layer.json().boxed()
                } else {
                    layer.boxed()
                };
                (layer, Some(guard))
            }
            None => {
                let layer = fmt::layer().with_target(config.include_targets);
                let layer = if config.json_format {
                    layer.json().boxed()
                } else {
                    layer.boxed()
                };
                (layer, None)
            }
        };

    tracing_subscriber::registry()
        .with(layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| SiegeError::config_with_source("Failed to install tracing subscriber", e))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(!config.json_format);
        assert!(config.file_path.is_none());
        assert!(config.include_targets);
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let config = LoggingConfig {
            level: "siege=notalevel".to_string(),
            ..LoggingConfig::default()
        };
        assert!(matches!(config.env_filter(), Err(SiegeError::Config { .. })));
    }
}
