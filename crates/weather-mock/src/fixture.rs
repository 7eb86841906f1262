//! Fixture store holding the pre-recorded weather datasets
//!
//! The store is built once, from disk or from in-memory values, and is
//! read-only afterwards. Datasets sit behind `Arc` so responses can hand them
//! out without copying the JSON tree.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info};

use crate::error::{Error, LoadCause, Result};

/// Category of weather data a fixture holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureKind {
    /// Current conditions
    Current,
    /// Hour-by-hour series
    Hourly,
    /// Day-by-day series
    Daily,
}

impl FixtureKind {
    /// All kinds, in load order.
    pub const ALL: [FixtureKind; 3] = [
        FixtureKind::Current,
        FixtureKind::Hourly,
        FixtureKind::Daily,
    ];

    /// Logical fixture name, also the file stem on disk.
    pub fn name(self) -> &'static str {
        match self {
            FixtureKind::Current => "current_weather",
            FixtureKind::Hourly => "hourly_weather",
            FixtureKind::Daily => "daily_weather",
        }
    }

    /// File name of this fixture inside a fixture directory.
    pub fn file_name(self) -> String {
        format!("{}.json", self.name())
    }
}

impl fmt::Display for FixtureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable set of the three weather fixtures.
///
/// # Example
///
/// ```rust,no_run
/// use weather_mock::FixtureStore;
///
/// # async fn example() -> weather_mock::Result<()> {
/// let store = FixtureStore::load("tests/fixtures/data").await?;
/// println!("current: {}", store.current());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FixtureStore {
    current: Arc<Value>,
    hourly: Arc<Value>,
    daily: Arc<Value>,
}

impl FixtureStore {
    /// Load `current_weather.json`, `hourly_weather.json` and
    /// `daily_weather.json` from `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Load`] for the first fixture that is missing or is not
    /// valid JSON. Nothing is returned on partial success.
    pub async fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();

        let result = load_all(dir).await;

        match &result {
            Ok(_) => info!(dir = %dir.display(), "Test fixtures loaded successfully"),
            Err(e) => error!(dir = %dir.display(), error = %e, "Error loading test fixtures"),
        }

        result
    }

    /// Build a store from in-memory datasets.
    pub fn from_values(current: Value, hourly: Value, daily: Value) -> Self {
        Self {
            current: Arc::new(current),
            hourly: Arc::new(hourly),
            daily: Arc::new(daily),
        }
    }

    /// Current-conditions dataset.
    pub fn current(&self) -> &Value {
        &self.current
    }

    /// Hourly dataset.
    pub fn hourly(&self) -> &Value {
        &self.hourly
    }

    /// Daily dataset.
    pub fn daily(&self) -> &Value {
        &self.daily
    }

    /// Dataset for `kind`.
    pub fn get(&self, kind: FixtureKind) -> &Value {
        self.slot(kind)
    }

    /// Shared handle to the dataset for `kind`.
    pub fn dataset(&self, kind: FixtureKind) -> Arc<Value> {
        Arc::clone(self.slot(kind))
    }

    fn slot(&self, kind: FixtureKind) -> &Arc<Value> {
        match kind {
            FixtureKind::Current => &self.current,
            FixtureKind::Hourly => &self.hourly,
            FixtureKind::Daily => &self.daily,
        }
    }
}

/// Path of `kind`'s fixture file inside `dir`.
pub fn fixture_path(dir: &Path, kind: FixtureKind) -> PathBuf {
    dir.join(kind.file_name())
}

async fn load_all(dir: &Path) -> Result<FixtureStore> {
    let current = load_fixture(dir, FixtureKind::Current).await?;
    let hourly = load_fixture(dir, FixtureKind::Hourly).await?;
    let daily = load_fixture(dir, FixtureKind::Daily).await?;
    Ok(FixtureStore::from_values(current, hourly, daily))
}

async fn load_fixture(dir: &Path, kind: FixtureKind) -> Result<Value> {
    let path = fixture_path(dir, kind);
    debug!(kind = %kind, path = %path.display(), "Reading fixture");

    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| Error::load(kind, &path, LoadCause::Io(e)))?;

    serde_json::from_str(&content).map_err(|e| Error::load(kind, &path, LoadCause::Json(e)))
}
