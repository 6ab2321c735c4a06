//! Place name → weather report pipeline
//!
//! Three ordered stages (geocode, current conditions, daily forecast). Any
//! stage failing stops the pipeline and nothing from earlier stages is kept.

use crate::api::{ApiError, CurrentReading, WeatherSource};
use crate::conditions::{ForecastShapeError, WindDirection, classify, normalize_forecast};
use crate::state::{CurrentConditions, GeocodedPlace, WeatherReport};

/// Why a lookup failed. The `Display` text is what the user sees.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Location not found")]
    LocationNotFound {
        place: String,
        #[source]
        source: Option<ApiError>,
    },

    #[error("Weather data unavailable")]
    ConditionsUnavailable(#[source] ApiError),

    #[error("Forecast data unavailable")]
    ForecastUnavailable(#[source] ForecastFailure),
}

#[derive(Debug, thiserror::Error)]
pub enum ForecastFailure {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Shape(#[from] ForecastShapeError),
}

impl LookupError {
    /// Underlying cause, for logs
    pub fn detail(&self) -> Option<String> {
        std::error::Error::source(self).map(|e| e.to_string())
    }
}

/// Resolve `place` and fetch its current conditions and forecast.
pub async fn lookup_weather<S>(source: &S, place: &str) -> Result<WeatherReport, LookupError>
where
    S: WeatherSource + ?Sized,
{
    let result = run_stages(source, place.trim()).await;
    match &result {
        Ok(report) => tracing::info!(
            place = %report.current.display_location(),
            days = report.forecast.len(),
            "weather lookup succeeded"
        ),
        Err(e) => tracing::warn!(
            place = place.trim(),
            error = %e,
            detail = %e.detail().unwrap_or_default(),
            "weather lookup failed"
        ),
    }
    result
}

async fn run_stages<S>(source: &S, place: &str) -> Result<WeatherReport, LookupError>
where
    S: WeatherSource + ?Sized,
{
    let geocoded = match source.geocode(place).await {
        Ok(Some(found)) => found,
        Ok(None) => {
            return Err(LookupError::LocationNotFound {
                place: place.to_string(),
                source: None,
            });
        }
        Err(e) => {
            return Err(LookupError::LocationNotFound {
                place: place.to_string(),
                source: Some(e),
            });
        }
    };
    let coordinates = geocoded.coordinates;

    let reading = source
        .current(coordinates)
        .await
        .map_err(LookupError::ConditionsUnavailable)?;

    let daily = source
        .daily(coordinates)
        .await
        .map_err(|e| LookupError::ForecastUnavailable(e.into()))?;

    let forecast = normalize_forecast(
        &daily.time,
        &daily.temperature_2m_max,
        &daily.temperature_2m_min,
        &daily.weather_code,
    )
    .map_err(|e| LookupError::ForecastUnavailable(e.into()))?;

    Ok(WeatherReport {
        current: current_conditions(place, &geocoded, &reading),
        forecast,
    })
}

fn current_conditions(
    place: &str,
    geocoded: &GeocodedPlace,
    reading: &CurrentReading,
) -> CurrentConditions {
    CurrentConditions {
        temperature_c: reading.temperature_2m,
        feels_like_c: reading.apparent_temperature,
        humidity_pct: reading.relative_humidity_2m.round().clamp(0.0, 100.0) as u8,
        wind_kph: reading.wind_speed_10m,
        wind_direction: WindDirection::from_degrees(reading.wind_direction_10m),
        condition: classify(reading.weather_code),
        location_name: place.to_string(),
        country_name: geocoded.country.clone().unwrap_or_default(),
    }
}
