//! The weather observation record.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single weather measurement for one station on one date.
///
/// Observations are plain records: the engine reads them through shared
/// references and never mutates them. `(station_id, date)` pairs need not be
/// unique; the position of an observation within the input sequence carries
/// meaning for streak detection and must be preserved by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Calendar date of the measurement (no time of day).
    pub date: NaiveDate,
    /// Identifier of the monitored location. Non-empty.
    pub station_id: String,
    /// Free-text conditions summary. May be empty.
    pub description: String,
    /// Air temperature in degrees Celsius. May be negative.
    pub temperature: f64,
    /// Relative humidity in percent. 0–100 expected but not enforced.
    pub humidity: f64,
    /// Wind speed, non-negative.
    pub wind_speed: f64,
    /// Precipitation amount, non-negative. `0` means no precipitation.
    pub precipitation: f64,
}

impl Observation {
    /// Convenience constructor.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        date: NaiveDate,
        station_id: impl Into<String>,
        description: impl Into<String>,
        temperature: f64,
        humidity: f64,
        wind_speed: f64,
        precipitation: f64,
    ) -> Self {
        Self {
            date,
            station_id: station_id.into(),
            description: description.into(),
            temperature,
            humidity,
            wind_speed,
            precipitation,
        }
    }

    /// Calendar month of the observation date (1..=12).
    pub fn month(&self) -> u8 {
        self.date.month() as u8
    }

    /// English name of the observation's calendar month.
    pub fn month_name(&self) -> &'static str {
        month_name(self.month())
    }
}

/// English name of a 1-indexed calendar month.
///
/// # Panics
///
/// Panics if `month` is outside 1..=12. Months obtained from a valid
/// [`NaiveDate`] are always in range.
pub fn month_name(month: u8) -> &'static str {
    chrono::Month::try_from(month)
        .expect("month from a valid date is in 1..=12")
        .name()
}
