//! Blocking HTTP client for the current-weather endpoint.

use std::time::Duration;

use chrono::Local;
use reqwest::blocking::Client;
use tracing::{debug, warn};

use aeolus_engine::Observation;

use crate::decode::decode_current;
use crate::error::ProviderError;

/// Default endpoint root for the OpenWeatherMap API.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// One-request-per-station acquisition client.
///
/// The API key and the station list are configuration owned by the caller;
/// nothing here is hard-coded beyond the endpoint path shape.
pub struct WeatherProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherProvider {
    /// Builds a provider with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Request`] if the HTTP client cannot be
    /// constructed.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ProviderError> {
        Self::with_timeout(base_url, api_key, DEFAULT_TIMEOUT)
    }

    /// Builds a provider with an explicit request timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("aeolus/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Fetches the current observation for one station, stamped with the
    /// local date of acquisition.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Status`] for a non-success response,
    /// [`ProviderError::Request`] for transport failures, and
    /// [`ProviderError::Payload`] if the body cannot be decoded.
    pub fn fetch_current(&self, station: &str) -> Result<Observation, ProviderError> {
        let url = format!("{}/data/2.5/weather", self.base_url);
        debug!(station, "requesting current weather");

        let response = self
            .client
            .get(&url)
            .query(&[("q", station), ("appid", self.api_key.as_str())])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
            });
        }

        let payload = response.text()?;
        decode_current(&payload, station, Local::now().date_naive())
    }

    /// Fetches every station in order, skipping the ones that fail.
    ///
    /// A failed station means "no observation available for this location":
    /// it is logged at warn level and the batch continues, so a partial
    /// outage still yields a best-effort observation sequence.
    pub fn fetch_all(&self, stations: &[String]) -> Vec<Observation> {
        let mut observations = Vec::with_capacity(stations.len());
        for station in stations {
            match self.fetch_current(station) {
                Ok(obs) => observations.push(obs),
                Err(e) => warn!(
                    station = station.as_str(),
                    error = %e,
                    "no observation available for this location"
                ),
            }
        }
        observations
    }
}
