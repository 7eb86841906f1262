//! # weather-mock
//!
//! Fixture-backed mock HTTP client for testing weather API consumers without
//! network access:
//! - Loads current, hourly and daily JSON fixtures once
//! - Routes request URLs to the right fixture
//! - Picks daily over hourly data for date ranges longer than two days
//! - Fails loudly on endpoints that have no mock
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use weather_mock::{MockClient, MockConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MockClient::from_config(MockConfig::with_fixture_dir("tests/fixtures/data")).await?;
//!
//!     let response = client
//!         .get("https://api.example/current_weather?lat=52.5&lon=13.4")
//!         .await?;
//!
//!     println!("{} {}: {}", response.status(), response.status_text(), response.data());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export commonly used types
pub use client::{ClientDefaults, HttpGet, MockClient};
pub use config::{MockConfig, MockConfigBuilder};
pub use error::{Error, LoadCause, Result};
pub use fixture::{FixtureKind, FixtureStore};
pub use response::MockResponse;
pub use route::{DateSpan, Route};

// Module declarations
pub mod client;
pub mod config;
pub mod error;
pub mod fixture;
pub mod observability;
pub mod response;
pub mod route;

// Re-export key dependencies for convenience
pub use async_trait::async_trait;
pub use http::StatusCode;
pub use serde_json::Value as JsonValue;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use weather_mock::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Error, FixtureKind, FixtureStore, HttpGet, MockClient, MockConfig, MockResponse, Result,
        Route,
    };
}

/// Crate version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
