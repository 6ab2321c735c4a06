//! Open-Meteo API client

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::conditions::FORECAST_DAYS;
use crate::state::{Coordinates, GeocodedPlace};

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com";

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,wind_speed_10m,wind_direction_10m,weather_code";
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min";

/// Transport, status or decode failure talking to Open-Meteo
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}

// ============================================================================
// Wire types
// ============================================================================

/// Geocoding API response from Open-Meteo
#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
}

impl From<GeocodingResult> for GeocodedPlace {
    fn from(result: GeocodingResult) -> Self {
        GeocodedPlace {
            name: result.name,
            country: result.country,
            coordinates: Coordinates {
                latitude: result.latitude,
                longitude: result.longitude,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    current: CurrentReading,
}

/// Instantaneous readings as returned by the forecast API
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CurrentReading {
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub apparent_temperature: f64,
    pub wind_speed_10m: f64,
    pub wind_direction_10m: f64,
    pub weather_code: i64,
}

#[derive(Debug, Deserialize)]
struct DailyResponse {
    daily: DailySeries,
}

/// Parallel per-day arrays, index-aligned by the API
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DailySeries {
    pub time: Vec<NaiveDate>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub weather_code: Vec<i64>,
}

// ============================================================================
// Client
// ============================================================================

/// The three upstream calls a lookup is built from
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Best match for a free-text place name, `None` when nothing matches
    async fn geocode(&self, place: &str) -> Result<Option<GeocodedPlace>, ApiError>;

    async fn current(&self, coordinates: Coordinates) -> Result<CurrentReading, ApiError>;

    /// Daily records in the location's own timezone
    async fn daily(&self, coordinates: Coordinates) -> Result<DailySeries, ApiError>;
}

#[derive(Clone, Debug)]
pub struct OpenMeteoClient {
    http: reqwest::Client,
    geocoding_url: String,
    forecast_url: String,
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new(DEFAULT_GEOCODING_URL, DEFAULT_FORECAST_URL)
    }
}

impl OpenMeteoClient {
    pub fn new(geocoding_url: impl Into<String>, forecast_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            geocoding_url: trim_base(geocoding_url.into()),
            forecast_url: trim_base(forecast_url.into()),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        tracing::debug!(%url, "GET");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(response.json().await?)
    }
}

fn trim_base(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[async_trait]
impl WeatherSource for OpenMeteoClient {
    async fn geocode(&self, place: &str) -> Result<Option<GeocodedPlace>, ApiError> {
        let url = format!(
            "{}/v1/search?name={}&count=1&language=en",
            self.geocoding_url,
            urlencoding::encode(place)
        );

        let data: GeocodingResponse = self.get_json(&url).await?;

        Ok(data
            .results
            .and_then(|results| results.into_iter().next())
            .map(GeocodedPlace::from))
    }

    async fn current(&self, coordinates: Coordinates) -> Result<CurrentReading, ApiError> {
        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&current={}",
            self.forecast_url, coordinates.latitude, coordinates.longitude, CURRENT_FIELDS
        );

        let data: CurrentResponse = self.get_json(&url).await?;
        Ok(data.current)
    }

    async fn daily(&self, coordinates: Coordinates) -> Result<DailySeries, ApiError> {
        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&daily={}&timezone=auto&forecast_days={}",
            self.forecast_url,
            coordinates.latitude,
            coordinates.longitude,
            DAILY_FIELDS,
            FORECAST_DAYS
        );

        let data: DailyResponse = self.get_json(&url).await?;
        Ok(data.daily)
    }
}
