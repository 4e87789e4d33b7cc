//! The analytics report returned to callers.

use serde::Serialize;

use crate::error::AnalyticsError;
use crate::streak::StreakEvent;
use crate::summary::DatasetAverages;

/// One station together with the metric that ranked it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationMetric {
    pub station_id: String,
    pub value: f64,
}

/// Aggregates for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyStats {
    pub month: String,
    pub avg_temperature: f64,
    pub avg_humidity: f64,
    pub total_precipitation: f64,
}

/// The month with the highest average wind speed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyWind {
    pub month: String,
    pub avg_wind_speed: f64,
}

/// Derived analytics for one observation sequence.
///
/// A plain transient value: nothing here borrows the input, and the engine
/// keeps no state between invocations, so the report can be moved across
/// thread boundaries freely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    /// Stations ranked by descending mean temperature.
    pub hottest_stations: Vec<StationMetric>,
    /// Stations ranked by ascending mean temperature.
    pub coldest_stations: Vec<StationMetric>,
    /// Stations ranked by descending mean humidity.
    pub most_humid_stations: Vec<StationMetric>,
    /// Per-month aggregates, January through December.
    pub monthly: Vec<MonthlyStats>,
    /// Month with the highest average wind speed. `None` on empty input.
    pub windiest_month: Option<MonthlyWind>,
    /// Rain-streak crossings in encounter order.
    pub rain_streaks: Vec<StreakEvent>,
    /// Temperature-rise-streak crossings in encounter order.
    pub temperature_rise_streaks: Vec<StreakEvent>,
    /// Whole-dataset averages.
    pub averages: DatasetAverages,
}

/// Serializes a report to pretty-printed JSON.
pub fn to_json(report: &AnalyticsReport) -> Result<String, AnalyticsError> {
    serde_json::to_string_pretty(report).map_err(|e| AnalyticsError::Serialization {
        reason: e.to_string(),
    })
}
