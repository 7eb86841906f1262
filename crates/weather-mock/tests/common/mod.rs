//! Common test utilities and helpers

use std::path::{Path, PathBuf};

use weather_mock::{FixtureStore, MockClient, MockConfig};

/// Directory holding the sample weather fixtures
pub fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("data")
}

/// Load a single fixture file as JSON
#[allow(dead_code)]
pub fn load_fixture_json(name: &str) -> serde_json::Value {
    let path = fixture_dir().join(format!("{}.json", name));

    let content = std::fs::read_to_string(&path).unwrap_or_else(|e| {
        panic!("Failed to load fixture '{}' from {:?}: {}", name, path, e)
    });
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Fixture '{}' is not valid JSON: {}", name, e))
}

/// Load the sample fixture store
#[allow(dead_code)]
pub async fn sample_store() -> FixtureStore {
    FixtureStore::load(fixture_dir())
        .await
        .expect("Failed to load sample fixtures")
}

/// Build a mock client over the sample fixtures
#[allow(dead_code)]
pub async fn sample_client() -> MockClient {
    MockClient::from_config(MockConfig::with_fixture_dir(fixture_dir()))
        .await
        .expect("Failed to build mock client")
}
