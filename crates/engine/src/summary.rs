//! Whole-dataset scalar aggregates.

use serde::Serialize;

use crate::observation::Observation;
use crate::stats;

/// Arithmetic means over the entire input sequence.
///
/// All three fields default to `0.0` on empty input so the summary stays
/// total when acquisition returned no data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DatasetAverages {
    /// Mean temperature in degrees Celsius.
    pub temperature: f64,
    /// Mean relative humidity in percent.
    pub humidity: f64,
    /// Mean wind speed.
    pub wind_speed: f64,
}

/// Computes the whole-dataset averages.
pub fn dataset_averages(observations: &[Observation]) -> DatasetAverages {
    let temperatures: Vec<f64> = observations.iter().map(|o| o.temperature).collect();
    let humidities: Vec<f64> = observations.iter().map(|o| o.humidity).collect();
    let wind_speeds: Vec<f64> = observations.iter().map(|o| o.wind_speed).collect();

    DatasetAverages {
        temperature: stats::mean(&temperatures),
        humidity: stats::mean(&humidities),
        wind_speed: stats::mean(&wind_speeds),
    }
}
