//! Test utilities and shared test helpers.
//!
//! Enabled for unit tests and, through the `testing` feature, for the
//! integration tests of downstream crates.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging for tests. Safe to call multiple times.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Discord-related test fixtures.
pub mod discord_fixtures {
    use crate::{ChannelId, MessageId};

    /// Create a test channel ID.
    pub const fn test_channel_id() -> ChannelId {
        ChannelId(123_456_789_012_345_678)
    }

    /// Create a test ID for an inbound user message.
    pub const fn test_message_id() -> MessageId {
        MessageId(223_456_789_012_345_678)
    }

    /// Create a test ID for the placeholder posted by the bot.
    pub const fn test_placeholder_id() -> MessageId {
        MessageId(323_456_789_012_345_678)
    }
}

/// Property-based testing strategies.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use proptest::prelude::*;

    /// Strategy for generating plausible player handles.
    pub fn handle_strategy() -> impl Strategy<Value = String> {
        r"[a-zA-Z0-9_.\-]{3,15}".prop_map(|s| s)
    }

    /// Strategy for generating non-negative stat values with sane magnitudes.
    pub fn stat_value_strategy() -> impl Strategy<Value = f64> {
        0.0f64..1_000_000.0
    }
}
