//! Mock HTTP response handling

use std::sync::Arc;

use http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::fixture::FixtureKind;

/// Response returned by the mock client in place of a real network response.
///
/// Carries the minimal subset a weather client reads: the JSON body, the
/// status code and its reason phrase.
#[derive(Debug, Clone)]
pub struct MockResponse {
    data: Arc<Value>,
    status: StatusCode,
    status_text: String,
    kind: FixtureKind,
}

impl MockResponse {
    /// Create a `200 OK` response serving `data` from the `kind` fixture.
    pub fn ok(kind: FixtureKind, data: Arc<Value>) -> Self {
        Self::with_status(kind, data, StatusCode::OK)
    }

    /// Create a response with an explicit status code.
    pub fn with_status(kind: FixtureKind, data: Arc<Value>, status: StatusCode) -> Self {
        Self {
            data,
            status,
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            kind,
        }
    }

    /// Get the response body.
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Get the status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the status reason phrase (e.g. `"OK"`).
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Which fixture produced this response.
    pub fn kind(&self) -> FixtureKind {
        self.kind
    }

    /// Check if the response is successful (2xx status).
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Deserialize the body into the consumer's own type.
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        T::deserialize(self.data.as_ref())
    }

    /// Take the body, cloning only if it is still shared.
    pub fn into_data(self) -> Value {
        Arc::try_unwrap(self.data).unwrap_or_else(|shared| (*shared).clone())
    }
}
