//! Request classification: which fixture answers a URL
//!
//! # Routing order
//!
//! Routes are checked in [`Route::ALL`] order and the first match wins:
//!
//! 1. [`Route::CurrentWeather`]: URL contains `current_weather`
//! 2. [`Route::Weather`]: URL contains `weather`
//!
//! A `Weather` request is answered with the daily fixture when its
//! `date`..`last_date` range spans more than two days, and with the hourly
//! fixture otherwise. Missing or unparseable dates fall back to hourly; they
//! are never an error. A URL matching no route is [`Error::UnknownEndpoint`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::debug;

use crate::error::{Error, Result};
use crate::fixture::{FixtureKind, FixtureStore};
use crate::response::MockResponse;

/// Query key holding the first day of a requested range.
pub const START_DATE_PARAM: &str = "date";

/// Query key holding the last day of a requested range.
pub const END_DATE_PARAM: &str = "last_date";

/// Ranges longer than this many days are served from the daily fixture.
pub const DAILY_THRESHOLD_DAYS: f64 = 2.0;

const NAIVE_DATETIME_FORMATS: [&str; 3] =
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// A mocked endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Current-conditions endpoint
    CurrentWeather,
    /// Generic weather endpoint (hourly or daily by date range)
    Weather,
}

impl Route {
    /// All routes, in priority order.
    pub const ALL: [Route; 2] = [Route::CurrentWeather, Route::Weather];

    /// Substring that identifies this route in a URL.
    pub fn marker(self) -> &'static str {
        match self {
            Route::CurrentWeather => "current_weather",
            Route::Weather => "weather",
        }
    }

    /// Check whether `url` targets this route.
    pub fn matches(self, url: &str) -> bool {
        url.contains(self.marker())
    }

    /// First route matching `url`, if any.
    pub fn classify(url: &str) -> Option<Route> {
        Self::ALL.into_iter().find(|route| route.matches(url))
    }
}

/// Date range requested through the `date` / `last_date` query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    /// Start of the range
    pub start: DateTime<Utc>,
    /// End of the range
    pub end: DateTime<Utc>,
}

impl DateSpan {
    /// Extract the range from `url`.
    ///
    /// Returns `None` when either parameter is absent or does not parse as a
    /// date.
    pub fn from_url(url: &str) -> Option<Self> {
        let mut start = None;
        let mut end = None;

        for (key, value) in query_pairs(url) {
            match key.as_str() {
                START_DATE_PARAM if start.is_none() => start = Some(value),
                END_DATE_PARAM if end.is_none() => end = Some(value),
                _ => {}
            }
        }

        let (start, end) = (start?, end?);
        match (parse_date(&start), parse_date(&end)) {
            (Some(start), Some(end)) => Some(Self { start, end }),
            _ => {
                debug!(start = %start, end = %end, "Unparseable date range, treating as hourly");
                None
            }
        }
    }

    /// Length of the range in days (fractional, negative if reversed).
    pub fn days(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / 86_400_000.0
    }

    /// Fixture granularity for this range.
    pub fn granularity(&self) -> FixtureKind {
        if self.days() > DAILY_THRESHOLD_DAYS {
            FixtureKind::Daily
        } else {
            FixtureKind::Hourly
        }
    }
}

/// Decide which fixture answers `url`.
///
/// # Errors
///
/// Returns [`Error::UnknownEndpoint`] if no route matches.
pub fn select_kind(url: &str) -> Result<FixtureKind> {
    match Route::classify(url) {
        Some(Route::CurrentWeather) => Ok(FixtureKind::Current),
        Some(Route::Weather) => Ok(DateSpan::from_url(url)
            .map(|span| span.granularity())
            .unwrap_or(FixtureKind::Hourly)),
        None => Err(Error::unknown_endpoint(url)),
    }
}

/// Answer `url` from `store`.
pub fn respond(store: &FixtureStore, url: &str) -> Result<MockResponse> {
    let kind = select_kind(url)?;
    Ok(MockResponse::ok(kind, store.dataset(kind)))
}

/// Decoded query pairs of `url`. A literal `+` is kept as `+` so unencoded
/// offsets like `+02:00` survive.
fn query_pairs(url: &str) -> Vec<(String, String)> {
    let query = url.split_once('?').map(|(_, q)| q).unwrap_or_default();
    let query = query.split_once('#').map(|(q, _)| q).unwrap_or(query);
    let query = query.replace('+', "%2B");
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn store() -> FixtureStore {
        FixtureStore::from_values(json!({"now": true}), json!(["h"]), json!(["d"]))
    }

    #[test]
    fn test_route_priority_order() {
        assert_eq!(Route::ALL[0], Route::CurrentWeather);
        // "current_weather" contains "weather", so order decides
        assert!(Route::Weather.matches("/current_weather"));
        assert_eq!(Route::classify("/current_weather"), Some(Route::CurrentWeather));
    }

    #[rstest]
    #[case("https://api.example/current_weather?lat=1&lon=2", Some(Route::CurrentWeather))]
    #[case("https://api.example/weather?date=2024-01-01", Some(Route::Weather))]
    #[case("https://api.example/hourly_weather", Some(Route::Weather))]
    #[case("https://api.example/forecast", None)]
    #[case("", None)]
    fn test_classify(#[case] url: &str, #[case] expected: Option<Route>) {
        assert_eq!(Route::classify(url), expected);
    }

    #[rstest]
    #[case("2024-01-01", "2024-01-05", 4.0)]
    #[case("2024-01-01", "2024-01-02", 1.0)]
    #[case("2024-01-05", "2024-01-01", -4.0)]
    #[case("2024-01-01T00:00:00Z", "2024-01-03T12:00:00Z", 2.5)]
    #[case("2024-01-01T00:00:00%2B02:00", "2024-01-01T00:00:00Z", 2.0 / 24.0)]
    #[case("2024-01-01T06:00", "2024-01-01T18:00", 0.5)]
    #[case("2024-01-01T00:00:00+02:00", "2024-01-10T00:00:00+02:00", 9.0)]
    #[case("2024-01-01T00:00:00+02:00", "2024-01-01T00:00:00Z", 2.0 / 24.0)]
    fn test_span_days(#[case] start: &str, #[case] end: &str, #[case] days: f64) {
        let url = format!("/weather?date={start}&last_date={end}");
        let span = DateSpan::from_url(&url).unwrap();
        assert!((span.days() - days).abs() < 1e-9, "got {}", span.days());
    }

    #[test]
    fn test_span_decodes_percent_encoding() {
        let span =
            DateSpan::from_url("/weather?date=2024-01-01T00%3A00%3A00Z&last_date=2024-01-04").unwrap();
        assert_eq!(span.days(), 3.0);
    }

    #[test]
    fn test_span_uses_exact_keys() {
        // last_date listed first must not be read as the start date
        let span = DateSpan::from_url("/weather?last_date=2024-01-10&date=2024-01-01").unwrap();
        assert_eq!(span.days(), 9.0);

        assert!(DateSpan::from_url("/weather?start_date=2024-01-01&last_date=2024-01-10").is_none());
    }

    #[test]
    fn test_span_ignores_fragment() {
        let span = DateSpan::from_url("/weather?date=2024-01-01&last_date=2024-01-02#top").unwrap();
        assert_eq!(span.days(), 1.0);
    }

    #[rstest]
    #[case("/weather")]
    #[case("/weather?date=2024-01-01")]
    #[case("/weather?last_date=2024-01-01")]
    #[case("/weather?date=yesterday&last_date=2024-01-10")]
    #[case("/weather?date=2024-01-01&last_date=2024-13-45")]
    #[case("/weather?date=&last_date=")]
    fn test_span_absent_or_invalid(#[case] url: &str) {
        assert!(DateSpan::from_url(url).is_none());
    }

    #[rstest]
    #[case("https://api.example/current_weather?lat=1&lon=2", FixtureKind::Current)]
    #[case("https://api.example/current_weather?date=2024-01-01&last_date=2024-02-01", FixtureKind::Current)]
    #[case("https://api.example/weather?date=2024-01-01&last_date=2024-01-05", FixtureKind::Daily)]
    #[case("https://api.example/weather?date=2024-01-01&last_date=2024-01-02", FixtureKind::Hourly)]
    #[case("https://api.example/weather?date=2024-01-01&last_date=2024-01-03", FixtureKind::Hourly)]
    #[case("https://api.example/weather?date=2024-01-01&last_date=2024-01-01", FixtureKind::Hourly)]
    #[case("https://api.example/weather?date=2024-01-10&last_date=2024-01-01", FixtureKind::Hourly)]
    #[case("https://api.example/weather?date=2024-01-01", FixtureKind::Hourly)]
    #[case("https://api.example/weather?date=garbage&last_date=2024-02-01", FixtureKind::Hourly)]
    #[case(
        "https://api.example/weather?date=2024-01-01T00:00:00+02:00&last_date=2024-01-10T00:00:00+02:00",
        FixtureKind::Daily
    )]
    #[case(
        "https://api.example/weather?date=2024-01-01T00:00:00+02:00&last_date=2024-01-02T00:00:00+02:00",
        FixtureKind::Hourly
    )]
    fn test_select_kind(#[case] url: &str, #[case] expected: FixtureKind) {
        assert_eq!(select_kind(url).unwrap(), expected);
    }

    #[test]
    fn test_select_kind_unknown_endpoint() {
        let err = select_kind("https://api.example/forecast").unwrap_err();
        match err {
            Error::UnknownEndpoint { url } => assert_eq!(url, "https://api.example/forecast"),
            other => panic!("expected unknown endpoint, got {other:?}"),
        }
    }

    #[test]
    fn test_respond_wraps_dataset() {
        let store = store();
        let response = respond(&store, "/weather?date=2024-01-01&last_date=2024-01-09").unwrap();

        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(response.status_text(), "OK");
        assert_eq!(response.kind(), FixtureKind::Daily);
        assert_eq!(response.data(), store.daily());
    }
}
