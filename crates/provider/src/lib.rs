//! # aeolus-provider
//!
//! Acquisition collaborator for the aeolus analytics engine: one blocking
//! HTTP request per monitored station against the OpenWeatherMap
//! current-weather endpoint, decoded into [`aeolus_engine::Observation`]
//! values.
//!
//! A station whose fetch fails (network error or non-success status) is
//! reported as "no observation available" and skipped; the batch never
//! aborts as a whole. The engine downstream tolerates the resulting shorter
//! sequence without special-casing.

mod client;
mod decode;
mod error;

pub use client::{DEFAULT_BASE_URL, WeatherProvider};
pub use decode::decode_current;
pub use error::ProviderError;
