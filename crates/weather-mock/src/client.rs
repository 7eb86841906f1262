//! Mock client standing in for a weather API HTTP client

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::{
    config::MockConfig,
    error::Result,
    fixture::FixtureStore,
    observability::{CallRecord, CallTimer},
    response::MockResponse,
    route,
};

/// Minimal GET interface a weather client needs from its HTTP layer.
///
/// Write the code under test against this trait and hand it a
/// [`MockClient`] in tests.
#[async_trait]
pub trait HttpGet: Send + Sync + fmt::Debug {
    /// Fetch `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be answered.
    async fn get(&self, url: &str) -> Result<MockResponse>;

    /// Timeout the client advertises for requests.
    fn timeout(&self) -> Duration;
}

/// Static client settings, kept for parity with a real HTTP client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientDefaults {
    /// Request timeout
    pub timeout: Duration,
}

/// Mock HTTP client answering weather requests from fixtures.
///
/// Cloning is cheap; clones share the same fixture store.
///
/// # Example
///
/// ```rust,no_run
/// use weather_mock::{MockClient, MockConfig};
///
/// # async fn example() -> weather_mock::Result<()> {
/// let client = MockClient::from_config(MockConfig::with_fixture_dir("tests/fixtures/data")).await?;
///
/// let response = client
///     .get("https://api.example/weather?date=2024-01-01&last_date=2024-01-05")
///     .await?;
/// assert_eq!(response.status().as_u16(), 200);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MockClient {
    inner: Arc<MockClientInner>,
}

struct MockClientInner {
    store: Arc<FixtureStore>,
    defaults: ClientDefaults,
}

impl MockClient {
    /// Create a client over `store` with default settings.
    pub fn new(store: impl Into<Arc<FixtureStore>>) -> Self {
        Self::with_config(store, &MockConfig::default())
    }

    /// Create a client over `store` using the settings in `config`.
    ///
    /// `config.fixture_dir` is not consulted; the store is already loaded.
    pub fn with_config(store: impl Into<Arc<FixtureStore>>, config: &MockConfig) -> Self {
        Self {
            inner: Arc::new(MockClientInner {
                store: store.into(),
                defaults: ClientDefaults {
                    timeout: config.timeout,
                },
            }),
        }
    }

    /// Load fixtures from `config.fixture_dir` and create a client over them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Load`](crate::Error::Load) if any fixture is missing
    /// or malformed.
    pub async fn from_config(config: MockConfig) -> Result<Self> {
        let store = FixtureStore::load(&config.fixture_dir).await?;
        Ok(Self::with_config(store, &config))
    }

    /// Answer a GET for `url` from the fixtures.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEndpoint`](crate::Error::UnknownEndpoint) if
    /// `url` matches no mocked route.
    pub async fn get(&self, url: &str) -> Result<MockResponse> {
        let record = CallRecord::new(url);
        record.log_call();
        let timer = CallTimer::start();

        match route::respond(&self.inner.store, url) {
            Ok(response) => {
                record.log_served(response.kind(), response.status().as_u16(), timer.elapsed());
                Ok(response)
            }
            Err(e) => {
                record.log_error(&e.to_string(), timer.elapsed());
                Err(e)
            }
        }
    }

    /// Static client settings.
    pub fn defaults(&self) -> &ClientDefaults {
        &self.inner.defaults
    }

    /// Fixture store backing this client.
    pub fn store(&self) -> &FixtureStore {
        &self.inner.store
    }
}

impl fmt::Debug for MockClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockClient")
            .field("defaults", &self.inner.defaults)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl HttpGet for MockClient {
    async fn get(&self, url: &str) -> Result<MockResponse> {
        MockClient::get(self, url).await
    }

    fn timeout(&self) -> Duration {
        self.inner.defaults.timeout
    }
}
