use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::LookupError;
use crate::model::{Coordinates, CurrentObservation, DailyForecast};

pub const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const DAILY_FIELDS: &str =
    "temperature_2m_max,temperature_2m_min,precipitation_sum,windspeed_10m_max";

/// The three upstream calls a city lookup is made of. `OpenMeteoClient` is the
/// production implementation; tests script their own.
#[async_trait]
pub trait WeatherApi: Send + Sync + Debug {
    /// Resolve a free-text city name to its best-match coordinates.
    async fn resolve(&self, city: &str) -> Result<Coordinates, LookupError>;

    /// Fetch the multi-day daily aggregates for a position.
    async fn fetch_forecast(&self, coords: Coordinates) -> Result<DailyForecast, LookupError>;

    /// Fetch the current instantaneous observation for a position.
    async fn fetch_current(&self, coords: Coordinates) -> Result<CurrentObservation, LookupError>;
}

/// HTTP client for the Open-Meteo geocoding and forecast APIs. No API key
/// required. One try per request, no caching.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    http: Client,
    geocoding_url: String,
    forecast_url: String,
}

impl OpenMeteoClient {
    pub fn new() -> Result<Self, LookupError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, LookupError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            geocoding_url: GEOCODING_URL.to_string(),
            forecast_url: FORECAST_URL.to_string(),
        })
    }

    /// Point the client at different endpoints. Used by tests to target a
    /// mock server.
    pub fn with_base_urls(mut self, geocoding_url: &str, forecast_url: &str) -> Self {
        self.geocoding_url = geocoding_url.to_string();
        self.forecast_url = forecast_url.to_string();
        self
    }

    async fn get_json<T, Q>(&self, url: &str, query: &Q, what: &str) -> Result<T, LookupError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let res = self.http.get(url).query(query).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(LookupError::Network(format!(
                "{what} request failed with status {status}: {}",
                truncate_body(&body),
            )));
        }

        serde_json::from_str(&body)
            .map_err(|e| LookupError::Parse(format!("Malformed {what} response: {e}")))
    }
}

#[async_trait]
impl WeatherApi for OpenMeteoClient {
    async fn resolve(&self, city: &str) -> Result<Coordinates, LookupError> {
        tracing::debug!(city, "resolving coordinates");

        let parsed: GeocodingResponse = self
            .get_json(
                &self.geocoding_url,
                &[
                    ("name", city),
                    ("count", "1"),
                    ("language", "en"),
                    ("format", "json"),
                ],
                "geocoding",
            )
            .await?;

        let best = parsed
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::NotFound(city.to_string()))?;

        Ok(Coordinates {
            latitude: best.latitude,
            longitude: best.longitude,
        })
    }

    async fn fetch_forecast(&self, coords: Coordinates) -> Result<DailyForecast, LookupError> {
        let parsed: ForecastResponse = self
            .get_json(
                &self.forecast_url,
                &[
                    ("latitude", coords.latitude.to_string()),
                    ("longitude", coords.longitude.to_string()),
                    ("daily", DAILY_FIELDS.to_string()),
                    ("timezone", "auto".to_string()),
                ],
                "forecast",
            )
            .await?;

        let daily = parsed.daily;
        if daily.is_empty() {
            return Err(LookupError::Parse(
                "Forecast response contained no daily data".to_string(),
            ));
        }
        if daily.len().is_none() {
            return Err(LookupError::Parse(
                "Forecast response has misaligned daily columns".to_string(),
            ));
        }
        Ok(daily)
    }

    async fn fetch_current(&self, coords: Coordinates) -> Result<CurrentObservation, LookupError> {
        let parsed: CurrentResponse = self
            .get_json(
                &self.forecast_url,
                &[
                    ("latitude", coords.latitude.to_string()),
                    ("longitude", coords.longitude.to_string()),
                    ("current_weather", "true".to_string()),
                    ("timezone", "auto".to_string()),
                ],
                "current weather",
            )
            .await?;

        Ok(parsed.current_weather)
    }
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: DailyForecast,
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    current_weather: CurrentObservation,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
