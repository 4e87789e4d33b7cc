//! Decoding of current-weather payloads into observations.
//!
//! The provider reports temperature in Kelvin and omits the `rain` object
//! entirely when there is no precipitation. Decoding converts to Celsius
//! rounded to one decimal place and defaults precipitation to `0.0`.

use chrono::NaiveDate;
use serde::Deserialize;

use aeolus_engine::Observation;

use crate::error::ProviderError;

/// Current-weather response body, reduced to the fields we consume.
#[derive(Debug, Deserialize)]
struct CurrentWeather {
    #[serde(default)]
    weather: Vec<Condition>,
    main: MainReadings,
    wind: Wind,
    #[serde(default)]
    rain: Option<Rain>,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    /// Temperature in Kelvin.
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: f64,
}

/// Precipitation volume for the last hour or the last three hours.
#[derive(Debug, Deserialize)]
struct Rain {
    #[serde(rename = "1h", default)]
    one_hour: Option<f64>,
    #[serde(rename = "3h", default)]
    three_hour: Option<f64>,
}

/// Decodes one current-weather JSON payload into an [`Observation`]
/// stamped with the given acquisition date.
///
/// # Errors
///
/// Returns [`ProviderError::Payload`] if the body is not valid JSON or is
/// missing a required section (`main`, `wind`).
pub fn decode_current(
    payload: &str,
    station_id: &str,
    date: NaiveDate,
) -> Result<Observation, ProviderError> {
    let current: CurrentWeather = serde_json::from_str(payload)?;

    let description = current
        .weather
        .first()
        .map(|c| c.description.clone())
        .unwrap_or_default();
    let temperature = round_to_tenth(current.main.temp - 273.15);
    let precipitation = current
        .rain
        .and_then(|r| r.one_hour.or(r.three_hour))
        .unwrap_or(0.0);

    Ok(Observation::new(
        date,
        station_id,
        description,
        temperature,
        current.main.humidity,
        current.wind.speed,
        precipitation,
    ))
}

// Half-ties round toward positive infinity, so -2.25 becomes -2.2.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    const FULL_PAYLOAD: &str = r#"{
        "weather": [{"id": 500, "main": "Rain", "description": "light rain"}],
        "main": {"temp": 284.25, "humidity": 81},
        "wind": {"speed": 4.6, "deg": 220},
        "rain": {"1h": 0.35}
    }"#;

    #[test]
    fn decodes_full_payload() {
        let obs = decode_current(FULL_PAYLOAD, "London", date()).unwrap();
        assert_eq!(obs.station_id, "London");
        assert_eq!(obs.description, "light rain");
        // 284.25 K = 11.1 °C after rounding to one decimal.
        assert_relative_eq!(obs.temperature, 11.1, epsilon = 1e-9);
        assert_relative_eq!(obs.humidity, 81.0, epsilon = 1e-12);
        assert_relative_eq!(obs.wind_speed, 4.6, epsilon = 1e-12);
        assert_relative_eq!(obs.precipitation, 0.35, epsilon = 1e-12);
        assert_eq!(obs.date, date());
    }

    #[test]
    fn missing_rain_defaults_to_zero() {
        let payload = r#"{
            "weather": [{"description": "clear sky"}],
            "main": {"temp": 297.15, "humidity": 40},
            "wind": {"speed": 2.1}
        }"#;
        let obs = decode_current(payload, "Paris", date()).unwrap();
        assert_eq!(obs.precipitation, 0.0);
        assert_relative_eq!(obs.temperature, 24.0, epsilon = 1e-9);
    }

    #[test]
    fn three_hour_rain_is_a_fallback() {
        let payload = r#"{
            "weather": [{"description": "rain"}],
            "main": {"temp": 280.15, "humidity": 95},
            "wind": {"speed": 6.0},
            "rain": {"3h": 2.4}
        }"#;
        let obs = decode_current(payload, "Tokyo", date()).unwrap();
        assert_relative_eq!(obs.precipitation, 2.4, epsilon = 1e-12);
    }

    #[test]
    fn missing_weather_array_yields_empty_description() {
        let payload = r#"{
            "main": {"temp": 273.15, "humidity": 100},
            "wind": {"speed": 0.0}
        }"#;
        let obs = decode_current(payload, "Berlin", date()).unwrap();
        assert!(obs.description.is_empty());
        assert_relative_eq!(obs.temperature, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn rounding_is_to_one_decimal_place() {
        let payload = r#"{
            "weather": [],
            "main": {"temp": 284.29, "humidity": 50},
            "wind": {"speed": 1.0}
        }"#;
        let obs = decode_current(payload, "London", date()).unwrap();
        // 284.29 - 273.15 = 11.14 -> 11.1
        assert_relative_eq!(obs.temperature, 11.1, epsilon = 1e-9);
    }

    #[test]
    fn negative_half_ties_round_toward_positive_infinity() {
        assert_relative_eq!(round_to_tenth(-0.25), -0.2, epsilon = 1e-12);
        assert_relative_eq!(round_to_tenth(0.25), 0.3, epsilon = 1e-12);
        assert_relative_eq!(round_to_tenth(-2.25), -2.2, epsilon = 1e-12);
    }

    #[test]
    fn negative_temperatures_round_like_positive_ones() {
        // 262.95 K is -10.2 °C; the tie-break only matters on exact halves.
        let payload = r#"{
            "weather": [],
            "main": {"temp": 262.95, "humidity": 70},
            "wind": {"speed": 3.0}
        }"#;
        let obs = decode_current(payload, "Reykjavik", date()).unwrap();
        assert_relative_eq!(obs.temperature, -10.2, epsilon = 1e-9);
    }

    #[test]
    fn malformed_json_is_a_payload_error() {
        let err = decode_current("not json", "London", date()).unwrap_err();
        assert!(matches!(err, ProviderError::Payload { .. }));
    }

    #[test]
    fn missing_main_section_is_a_payload_error() {
        let payload = r#"{"weather": [], "wind": {"speed": 1.0}}"#;
        let err = decode_current(payload, "London", date()).unwrap_err();
        assert!(matches!(err, ProviderError::Payload { .. }));
    }
}
