use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::WeatherConfig;
use crate::error::Result;
use crate::season::SolarTerm;
use crate::weather::condition::WeatherCondition;

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentReadings,
}

#[derive(Debug, Deserialize)]
struct CurrentReadings {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    weather_code: i32,
}

#[derive(Debug, Error)]
enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(StatusCode),

    #[error("malformed body: {0}")]
    Body(#[from] serde_json::Error),
}

/// Parse an Open-Meteo `current` payload into a classified condition.
pub fn parse_forecast(body: &str) -> serde_json::Result<WeatherCondition> {
    let response: ForecastResponse = serde_json::from_str(body)?;
    let current = response.current;
    Ok(WeatherCondition::from_readings(
        current.temperature_2m,
        current.relative_humidity_2m,
        current.weather_code,
    ))
}

/// Seasonal stand-in weather for a given date.
pub fn fallback_weather_on(date: NaiveDate) -> WeatherCondition {
    WeatherCondition::from_solar_term(SolarTerm::from_date(date))
}

/// Seasonal stand-in weather for today.
pub fn fallback_weather() -> WeatherCondition {
    WeatherCondition::from_solar_term(SolarTerm::current())
}

/// Resolves current weather with a single request, never failing outward.
pub struct WeatherProvider {
    client: Client,
    config: WeatherConfig,
}

impl WeatherProvider {
    pub fn new(config: WeatherConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Current conditions at `coordinates`, or the seasonal fallback when
    /// there is no location or the provider cannot be reached.
    pub async fn current_weather(&self, coordinates: Option<Coordinates>) -> WeatherCondition {
        let Some(coordinates) = coordinates else {
            info!("No location available, using seasonal weather");
            return fallback_weather();
        };

        match self.fetch(coordinates).await {
            Ok(weather) => {
                info!(
                    temperature = weather.temperature,
                    condition = %weather.condition,
                    "Resolved current weather"
                );
                weather
            }
            Err(e) => {
                warn!("Weather lookup failed ({e}), using seasonal weather");
                fallback_weather()
            }
        }
    }

    async fn fetch(
        &self,
        coordinates: Coordinates,
    ) -> std::result::Result<WeatherCondition, FetchError> {
        debug!(
            "Requesting weather for {:.4},{:.4}",
            coordinates.latitude, coordinates.longitude
        );

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("latitude", coordinates.latitude.to_string()),
                ("longitude", coordinates.longitude.to_string()),
                (
                    "current",
                    "temperature_2m,relative_humidity_2m,weather_code".to_string(),
                ),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        Ok(parse_forecast(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::ConditionType;

    #[test]
    fn test_parse_forecast() {
        let body = r#"{
            "latitude": 39.9,
            "current": {"time": "2025-06-01T12:00", "temperature_2m": 18.0, "relative_humidity_2m": 65, "weather_code": 61}
        }"#;
        let weather = parse_forecast(body).unwrap();
        assert_eq!(weather.condition, ConditionType::Rainy);
        assert!((weather.humidity - 0.65).abs() < 1e-9);
    }

    #[test]
    fn test_parse_forecast_missing_current() {
        assert!(parse_forecast(r#"{"hourly": {}}"#).is_err());
    }

    #[test]
    fn test_fallback_follows_season() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 25).unwrap();
        let weather = fallback_weather_on(date);
        assert_eq!(weather.temperature, SolarTerm::Dashu.estimated_temperature());
        assert!(weather.is_hot());
    }
}
