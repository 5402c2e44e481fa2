//! Error types and utilities shared by every crate in the workspace.

use thiserror::Error;

/// Result type alias for bot operations.
pub type Result<T> = std::result::Result<T, SiegeError>;

/// Boxed error source carried by the structured variants.
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for bot operations.
#[derive(Error, Debug)]
pub enum SiegeError {
    /// Configuration related errors.
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description.
        message: String,
        /// Underlying cause.
        #[source]
        source: Option<BoxedSource>,
    },

    /// I/O related errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Network errors talking to the stats provider.
    #[error("Network error: {message}")]
    Network {
        /// Human readable description.
        message: String,
        /// Underlying cause.
        #[source]
        source: Option<BoxedSource>,
    },

    /// Discord API errors raised while posting or editing a message.
    #[error("Discord API error: {message}")]
    Discord {
        /// Human readable description.
        message: String,
        /// Underlying cause.
        #[source]
        source: Option<BoxedSource>,
    },

    /// The stats provider answered with an unexpected status.
    #[error("Stats provider error: {message}")]
    Provider {
        /// Human readable description.
        message: String,
        /// HTTP status code, when one was received.
        status_code: Option<u16>,
    },

    /// The stats provider has no player with the requested handle.
    #[error("Player not found: {handle}")]
    PlayerNotFound {
        /// The handle that was looked up.
        handle: String,
    },

    /// Serialization/deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation errors for user input or data.
    #[error("Validation error: {message}")]
    Validation {
        /// Human readable description.
        message: String,
        /// Offending field, when known.
        field: Option<String>,
    },
}

impl SiegeError {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new network error.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new network error with source.
    pub fn network_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Network {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new Discord API error.
    pub fn discord(msg: impl Into<String>) -> Self {
        Self::Discord {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new Discord API error with source.
    pub fn discord_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Discord {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new stats provider error with status code.
    pub fn provider_with_status(msg: impl Into<String>, status: u16) -> Self {
        Self::Provider {
            message: msg.into(),
            status_code: Some(status),
        }
    }

    /// Create a new player-not-found error.
    pub fn player_not_found(handle: impl Into<String>) -> Self {
        Self::PlayerNotFound {
            handle: handle.into(),
        }
    }

    /// Create a new validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new validation error with field name.
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Whether this error came from a failed player lookup rather than a local fault.
    pub const fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            Self::PlayerNotFound { .. }
                | Self::Provider { .. }
                | Self::Network { .. }
                | Self::Serialization(_)
        )
    }
}
