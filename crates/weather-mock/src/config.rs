//! Configuration for the mock client

use std::path::PathBuf;
use std::time::Duration;

/// Default directory holding the fixture files.
pub const DEFAULT_FIXTURE_DIR: &str = "tests/fixtures/data";

/// Default request timeout advertised by the mock client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(15_000);

/// Configuration for the mock client.
///
/// The timeout mirrors what a real HTTP client would expose. The mock never
/// waits on I/O, so it has no effect on behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockConfig {
    /// Directory containing `current_weather.json`, `hourly_weather.json`
    /// and `daily_weather.json`
    pub fixture_dir: PathBuf,

    /// Default timeout for requests
    pub timeout: Duration,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            fixture_dir: PathBuf::from(DEFAULT_FIXTURE_DIR),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl MockConfig {
    /// Create a configuration reading fixtures from `dir`.
    pub fn with_fixture_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            fixture_dir: dir.into(),
            ..Default::default()
        }
    }

    /// Create a new builder.
    pub fn builder() -> MockConfigBuilder {
        MockConfigBuilder::default()
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honoured if present. This
    /// will look for:
    /// - `WEATHER_MOCK_FIXTURE_DIR` for the fixture directory
    /// - `WEATHER_MOCK_TIMEOUT_MS` for the advertised timeout (milliseconds)
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self, crate::error::Error> {
        use std::env;

        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(dir) = env::var("WEATHER_MOCK_FIXTURE_DIR") {
            config.fixture_dir = PathBuf::from(dir);
        }

        if let Ok(timeout_str) = env::var("WEATHER_MOCK_TIMEOUT_MS") {
            let timeout_ms = timeout_str.trim().parse::<u64>().map_err(|_| {
                crate::error::Error::invalid_config(format!(
                    "WEATHER_MOCK_TIMEOUT_MS must be a whole number of milliseconds, got '{timeout_str}'"
                ))
            })?;
            config.timeout = Duration::from_millis(timeout_ms);
        }

        Ok(config)
    }

    /// Merge this configuration with another, with the other taking precedence.
    pub fn merge(mut self, other: MockConfig) -> Self {
        if other.fixture_dir.as_os_str() != DEFAULT_FIXTURE_DIR {
            self.fixture_dir = other.fixture_dir;
        }
        if other.timeout != DEFAULT_TIMEOUT {
            self.timeout = other.timeout;
        }

        self
    }
}

/// Builder for creating MockConfig with a fluent API.
#[derive(Debug, Default)]
pub struct MockConfigBuilder {
    config: MockConfig,
}

impl MockConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fixture directory.
    pub fn fixture_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.fixture_dir = dir.into();
        self
    }

    /// Set the advertised request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> MockConfig {
        self.config
    }
}
