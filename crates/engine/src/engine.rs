//! Engine orchestration: one observation sequence in, one report out.

use tracing::debug;

use crate::config::AnalyticsConfig;
use crate::error::AnalyticsError;
use crate::grouping::{grouped_mean, grouped_sum};
use crate::observation::{Observation, month_name};
use crate::ranking::{bottom_n, top_n};
use crate::report::{AnalyticsReport, MonthlyStats, MonthlyWind, StationMetric};
use crate::streak::detect_streaks;
use crate::summary::dataset_averages;

/// Runs the full analytics pass over one ordered observation sequence.
///
/// The sequence is treated as an immutable snapshot: grouping works on
/// copies of the derived metrics, and streak detection scans the slice in
/// its original order. Empty input is not an error; every section of the
/// report has a defined empty-input value (empty lists, `None` windiest
/// month, zero averages).
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidConfig`] if the configuration fails
/// validation, or [`AnalyticsError::InvalidObservation`] if any observation
/// carries an empty station id, a non-finite numeric field, or a negative
/// wind speed or precipitation amount.
pub fn analyze(
    observations: &[Observation],
    config: &AnalyticsConfig,
) -> Result<AnalyticsReport, AnalyticsError> {
    config.validate()?;
    validate(observations)?;

    debug!(
        n_observations = observations.len(),
        "analyzing observation sequence"
    );

    // Extremal rankings over per-station means.
    let temp_by_station = grouped_mean(observations, |o| o.station_id.clone(), |o| o.temperature);
    let humidity_by_station =
        grouped_mean(observations, |o| o.station_id.clone(), |o| o.humidity);

    let hottest_stations = to_station_metrics(top_n(&temp_by_station, config.top_n()));
    let coldest_stations = to_station_metrics(bottom_n(&temp_by_station, config.top_n()));
    let most_humid_stations = to_station_metrics(top_n(&humidity_by_station, config.top_n()));

    // Per-month aggregates, reported in calendar order. The three groupings
    // share first-seen key order, so rows line up by index.
    let temp_by_month = grouped_mean(observations, |o| o.month(), |o| o.temperature);
    let humidity_by_month = grouped_mean(observations, |o| o.month(), |o| o.humidity);
    let precip_by_month = grouped_sum(observations, |o| o.month(), |o| o.precipitation);

    let mut keyed_monthly: Vec<(u8, MonthlyStats)> = temp_by_month
        .into_iter()
        .zip(humidity_by_month)
        .zip(precip_by_month)
        .map(
            |(((month, avg_temperature), (_, avg_humidity)), (_, total_precipitation))| {
                let aggregates = MonthlyStats {
                    month: month_name(month).to_string(),
                    avg_temperature,
                    avg_humidity,
                    total_precipitation,
                };
                (month, aggregates)
            },
        )
        .collect();
    keyed_monthly.sort_by_key(|(month, _)| *month);
    let monthly: Vec<MonthlyStats> = keyed_monthly.into_iter().map(|(_, s)| s).collect();

    // Single-month max selection for wind.
    let wind_by_month = grouped_mean(observations, |o| o.month(), |o| o.wind_speed);
    let windiest_month = top_n(&wind_by_month, 1)
        .into_iter()
        .next()
        .map(|(month, avg_wind_speed)| MonthlyWind {
            month: month_name(month).to_string(),
            avg_wind_speed,
        });

    // Streak detection over the untouched, order-preserved input.
    let streaks = detect_streaks(observations, config);
    debug!(
        rain_events = streaks.rain.len(),
        rise_events = streaks.temperature_rise.len(),
        "streak detection complete"
    );

    Ok(AnalyticsReport {
        hottest_stations,
        coldest_stations,
        most_humid_stations,
        monthly,
        windiest_month,
        rain_streaks: streaks.rain,
        temperature_rise_streaks: streaks.temperature_rise,
        averages: dataset_averages(observations),
    })
}

fn to_station_metrics(ranked: Vec<(String, f64)>) -> Vec<StationMetric> {
    ranked
        .into_iter()
        .map(|(station_id, value)| StationMetric { station_id, value })
        .collect()
}

/// Rejects malformed observations before any aggregation runs.
fn validate(observations: &[Observation]) -> Result<(), AnalyticsError> {
    for (index, obs) in observations.iter().enumerate() {
        if obs.station_id.is_empty() {
            return Err(AnalyticsError::InvalidObservation {
                index,
                reason: "station_id is empty".to_string(),
            });
        }
        for (name, value) in [
            ("temperature", obs.temperature),
            ("humidity", obs.humidity),
            ("wind_speed", obs.wind_speed),
            ("precipitation", obs.precipitation),
        ] {
            if !value.is_finite() {
                return Err(AnalyticsError::InvalidObservation {
                    index,
                    reason: format!("{name} is not finite"),
                });
            }
        }
        if obs.wind_speed < 0.0 {
            return Err(AnalyticsError::InvalidObservation {
                index,
                reason: format!("wind_speed is negative: {}", obs.wind_speed),
            });
        }
        if obs.precipitation < 0.0 {
            return Err(AnalyticsError::InvalidObservation {
                index,
                reason: format!("precipitation is negative: {}", obs.precipitation),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn obs(station: &str, temperature: f64) -> Observation {
        Observation::new(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            station,
            "",
            temperature,
            50.0,
            3.0,
            0.0,
        )
    }

    #[test]
    fn empty_input_is_not_an_error() {
        let report = analyze(&[], &AnalyticsConfig::new()).unwrap();
        assert!(report.hottest_stations.is_empty());
        assert!(report.coldest_stations.is_empty());
        assert!(report.most_humid_stations.is_empty());
        assert!(report.monthly.is_empty());
        assert!(report.windiest_month.is_none());
        assert!(report.rain_streaks.is_empty());
        assert!(report.temperature_rise_streaks.is_empty());
        assert_eq!(report.averages.temperature, 0.0);
        assert_eq!(report.averages.humidity, 0.0);
        assert_eq!(report.averages.wind_speed, 0.0);
    }

    #[test]
    fn empty_station_id_is_rejected() {
        let bad = obs("", 10.0);
        let err = analyze(&[bad], &AnalyticsConfig::new()).unwrap_err();
        assert!(matches!(
            err,
            AnalyticsError::InvalidObservation { index: 0, .. }
        ));
    }

    #[test]
    fn non_finite_field_is_rejected() {
        let mut bad = obs("London", 10.0);
        bad.humidity = f64::NAN;
        let err = analyze(&[obs("Paris", 5.0), bad], &AnalyticsConfig::new()).unwrap_err();
        assert!(matches!(
            err,
            AnalyticsError::InvalidObservation { index: 1, .. }
        ));
    }

    #[test]
    fn negative_precipitation_is_rejected() {
        let mut bad = obs("London", 10.0);
        bad.precipitation = -1.0;
        let err = analyze(&[bad], &AnalyticsConfig::new()).unwrap_err();
        assert!(matches!(
            err,
            AnalyticsError::InvalidObservation { index: 0, .. }
        ));
    }

    #[test]
    fn invalid_config_is_rejected_before_input() {
        let cfg = AnalyticsConfig::new().with_top_n(0);
        let err = analyze(&[], &cfg).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidConfig { .. }));
    }
}
