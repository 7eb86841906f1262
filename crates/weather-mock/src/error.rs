//! Error types for the weather mock
//!
//! Two failures matter to a test run: a fixture that cannot be loaded, and a
//! request for an endpoint that has no mock. Both are modelled with `thiserror`
//! so they compose with `?` in test code.

use std::path::PathBuf;
use thiserror::Error;

use crate::fixture::FixtureKind;

/// Result type alias for weather mock operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the weather mock.
#[derive(Debug, Error)]
pub enum Error {
    /// A fixture file could not be read or parsed.
    ///
    /// Raised while building a [`FixtureStore`](crate::FixtureStore). There is
    /// no partial-success mode: one bad fixture fails the whole store.
    #[error("Failed to load {kind} fixture from {}: {source}", path.display())]
    Load {
        /// Which fixture failed
        kind: FixtureKind,
        /// File that was being loaded
        path: PathBuf,
        /// Underlying I/O or parse failure
        #[source]
        source: LoadCause,
    },

    /// The request URL matched no mocked route.
    ///
    /// Signals that a test is exercising an endpoint the mock does not know
    /// about. It is never answered with arbitrary data.
    #[error("Unknown API endpoint: {url}")]
    UnknownEndpoint {
        /// The offending request URL
        url: String,
    },

    /// A configuration value could not be interpreted.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Underlying cause of an [`Error::Load`].
#[derive(Debug, Error)]
pub enum LoadCause {
    /// The fixture file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The fixture file is not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a new `Load` error.
    pub fn load(kind: FixtureKind, path: impl Into<PathBuf>, source: impl Into<LoadCause>) -> Self {
        Self::Load {
            kind,
            path: path.into(),
            source: source.into(),
        }
    }

    /// Create a new `UnknownEndpoint` error.
    pub fn unknown_endpoint(url: impl Into<String>) -> Self {
        Self::UnknownEndpoint { url: url.into() }
    }

    /// Create a new `InvalidConfig` error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Check if this error came from loading fixtures.
    pub fn is_load_error(&self) -> bool {
        matches!(self, Error::Load { .. })
    }

    /// Check if this error is an unmocked endpoint.
    pub fn is_unknown_endpoint(&self) -> bool {
        matches!(self, Error::UnknownEndpoint { .. })
    }
}
