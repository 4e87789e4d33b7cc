//! Streak semantics through the full engine, including the inherited
//! repeated-notification behavior.

use aeolus_engine::{AnalyticsConfig, Observation, analyze};
use chrono::NaiveDate;

fn obs(station: &str, temperature: f64, precipitation: f64) -> Observation {
    Observation::new(
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        station,
        "",
        temperature,
        60.0,
        4.0,
        precipitation,
    )
}

/// Interleaving two stations resets runs at every boundary, so neither ever
/// accumulates a streak even though each station alone would qualify.
#[test]
fn interleaved_stations_reset_each_other() {
    let mut observations = Vec::new();
    for i in 0..9 {
        observations.push(obs("London", 10.0 + 5.0 * i as f64, 1.0));
        observations.push(obs("Paris", 10.0 + 5.0 * i as f64, 1.0));
    }

    let report = analyze(&observations, &AnalyticsConfig::new()).unwrap();
    assert!(report.rain_streaks.is_empty());
    assert!(report.temperature_rise_streaks.is_empty());
}

/// A later non-adjacent run for the same station starts a fresh streak
/// rather than resuming the earlier one.
#[test]
fn non_adjacent_runs_do_not_resume() {
    let mut observations: Vec<Observation> = (0..6).map(|_| obs("London", 10.0, 1.0)).collect();
    observations.push(obs("Paris", 10.0, 0.0));
    observations.extend((0..6).map(|_| obs("London", 10.0, 1.0)));

    // 6 + 6 wet observations for London, but never more than 7 consecutive.
    let report = analyze(&observations, &AnalyticsConfig::new()).unwrap();
    assert!(report.rain_streaks.is_empty());
}

/// Events re-fire on every qualifying observation past the threshold. This
/// repeated notification is carried over from the reference behavior on
/// purpose; collapsing to one event per crossing would be a semantic change.
#[test]
fn events_refire_on_every_qualifying_observation() {
    let observations: Vec<Observation> = (0..11).map(|_| obs("Tokyo", 20.0, 0.3)).collect();

    let report = analyze(&observations, &AnalyticsConfig::new()).unwrap();
    let positions: Vec<usize> = report.rain_streaks.iter().map(|e| e.position).collect();
    assert_eq!(positions, vec![7, 8, 9, 10]);
    assert!(report.rain_streaks.iter().all(|e| e.station_id == "Tokyo"));
}

/// One dry observation zeroes the rain run while leaving the rise run alone.
#[test]
fn rain_and_rise_runs_are_independent() {
    let temps = [10.0, 15.0, 20.0, 25.0, 30.0];
    let observations: Vec<Observation> = temps
        .iter()
        .enumerate()
        .map(|(i, &t)| obs("London", t, if i == 2 { 0.0 } else { 1.0 }))
        .collect();

    let report = analyze(&observations, &AnalyticsConfig::new()).unwrap();
    // The dry observation at position 2 does not interrupt the rise run.
    assert_eq!(report.temperature_rise_streaks.len(), 1);
    assert_eq!(report.temperature_rise_streaks[0].position, 4);
    assert!(report.rain_streaks.is_empty());
}
