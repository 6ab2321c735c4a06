//! OpenMeteoClient against a local mock server

use citycast::api::{ApiError, OpenMeteoClient, WeatherSource};
use citycast::lookup::lookup_weather;
use citycast::state::Coordinates;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CAIRO: Coordinates = Coordinates {
    latitude: 30.0444,
    longitude: 31.2357,
};

fn client(server: &MockServer) -> OpenMeteoClient {
    OpenMeteoClient::new(server.uri(), server.uri())
}

async fn mount_geocode(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("count", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_current(server: &MockServer, weather_code: i64) {
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param(
            "current",
            "temperature_2m,relative_humidity_2m,apparent_temperature,wind_speed_10m,wind_direction_10m,weather_code",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "latitude": 30.0,
            "longitude": 31.25,
            "current": {
                "time": "2024-06-03T12:00",
                "interval": 900,
                "temperature_2m": 28.5,
                "relative_humidity_2m": 40,
                "apparent_temperature": 29.1,
                "wind_speed_10m": 12.5,
                "wind_direction_10m": 100,
                "weather_code": weather_code
            }
        })))
        .mount(server)
        .await;
}

async fn mount_daily(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("timezone", "auto"))
        .and(query_param("forecast_days", "5"))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({
            "daily": {
                "time": ["2024-06-03", "2024-06-04", "2024-06-05", "2024-06-06", "2024-06-07"],
                "temperature_2m_max": [34.0, 35.5, 33.0, 32.1, 31.0],
                "temperature_2m_min": [22.0, 23.5, 21.0, 20.1, 19.0],
                "weather_code": [0, 1, 3, 61, 95]
            }
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_geocode_takes_first_match() {
    let server = MockServer::start().await;
    mount_geocode(
        &server,
        json!({"results": [
            {"name": "Cairo", "latitude": 30.0444, "longitude": 31.2357, "country": "Egypt"},
            {"name": "Cairo", "latitude": 37.0, "longitude": -89.2, "country": "United States"}
        ]}),
    )
    .await;

    let place = client(&server).geocode("Cairo").await.unwrap().unwrap();

    assert_eq!(place.name, "Cairo");
    assert_eq!(place.country.as_deref(), Some("Egypt"));
    assert_eq!(place.coordinates, CAIRO);
}

#[tokio::test]
async fn test_geocode_without_results_is_none() {
    let server = MockServer::start().await;
    mount_geocode(&server, json!({"generationtime_ms": 0.4})).await;

    let place = client(&server).geocode("Atlantis").await.unwrap();

    assert!(place.is_none());
}

#[tokio::test]
async fn test_geocode_encodes_place_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "São Paulo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": [
            {"name": "São Paulo", "latitude": -23.5, "longitude": -46.6, "country": "Brazil"}
        ]})))
        .mount(&server)
        .await;

    let place = client(&server).geocode("São Paulo").await.unwrap();

    assert!(place.is_some());
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let server = MockServer::start().await;
    mount_daily(&server, 503).await;

    let err = client(&server).daily(CAIRO).await.unwrap_err();

    assert!(matches!(err, ApiError::Status(status) if status.as_u16() == 503));
}

#[tokio::test]
async fn test_current_reading_fields() {
    let server = MockServer::start().await;
    mount_current(&server, 0).await;

    let reading = client(&server).current(CAIRO).await.unwrap();

    assert_eq!(reading.temperature_2m, 28.5);
    assert_eq!(reading.relative_humidity_2m, 40.0);
    assert_eq!(reading.wind_direction_10m, 100.0);
    assert_eq!(reading.weather_code, 0);
}

#[tokio::test]
async fn test_full_lookup_over_http() {
    let server = MockServer::start().await;
    mount_geocode(
        &server,
        json!({"results": [
            {"name": "Cairo", "latitude": 30.0444, "longitude": 31.2357, "country": "Egypt"}
        ]}),
    )
    .await;
    mount_current(&server, 0).await;
    mount_daily(&server, 200).await;

    let report = lookup_weather(&client(&server), "Cairo").await.unwrap();

    assert_eq!(report.current.display_location(), "Cairo, Egypt");
    assert_eq!(report.current.wind_direction.as_str(), "E");
    assert_eq!(report.forecast.len(), 5);
    assert_eq!(report.forecast[3].condition.text, "Light rain");
}

#[tokio::test]
async fn test_full_lookup_forecast_outage() {
    let server = MockServer::start().await;
    mount_geocode(
        &server,
        json!({"results": [
            {"name": "Cairo", "latitude": 30.0444, "longitude": 31.2357, "country": "Egypt"}
        ]}),
    )
    .await;
    mount_current(&server, 0).await;
    mount_daily(&server, 500).await;

    let err = lookup_weather(&client(&server), "Cairo").await.unwrap_err();

    assert_eq!(err.to_string(), "Forecast data unavailable");
}

#[tokio::test]
async fn test_unlisted_weather_code_is_unknown() {
    let server = MockServer::start().await;
    mount_geocode(
        &server,
        json!({"results": [
            {"name": "Cairo", "latitude": 30.0444, "longitude": 31.2357, "country": "Egypt"}
        ]}),
    )
    .await;
    mount_current(&server, 300).await;
    mount_daily(&server, 200).await;

    let report = lookup_weather(&client(&server), "Cairo").await.unwrap();

    assert_eq!(report.current.condition.text, "Unknown");
    assert_eq!(report.current.condition.icon, "113");
}
