//! Structured logging for mock calls
//!
//! Every `get` through the mock client is logged through this layer, so test
//! output shows which URL was requested and which fixture answered it.

use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::fixture::FixtureKind;

/// Metadata for one mock call
#[derive(Debug, Clone)]
pub struct CallRecord {
    /// Requested URL
    pub url: String,
}

impl CallRecord {
    /// Create a record for `url`
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Log the call being made
    pub fn log_call(&self) {
        info!(url = %self.url, "Mock API call");
    }

    /// Log the fixture that answered
    pub fn log_served(&self, kind: FixtureKind, status: u16, elapsed: Duration) {
        debug!(
            url = %self.url,
            kind = %kind,
            status,
            elapsed_us = elapsed.as_micros(),
            "Mock call served from fixture"
        );
    }

    /// Log a call that could not be answered
    pub fn log_error(&self, error: &str, elapsed: Duration) {
        warn!(
            url = %self.url,
            elapsed_us = elapsed.as_micros(),
            error = %error,
            "Mock call failed"
        );
    }
}

/// Timer for measuring call duration
pub struct CallTimer {
    start: Instant,
}

impl CallTimer {
    /// Start a new timer
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Install a `fmt` subscriber filtered by `RUST_LOG` (default
/// `weather_mock=info`).
///
/// Returns `false` if a global subscriber was already set, which is the normal
/// case when many tests call this.
#[cfg(feature = "trace")]
pub fn init_tracing() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("weather_mock=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init()
        .is_ok()
}
