//! Sequential streak detection over an ordered observation sequence.
//!
//! Streaks accumulate only over consecutive entries that share a station id.
//! State is a single run object for whichever station is at the scan head,
//! reset wholesale when the station id changes, deliberately NOT a map from
//! station id to counters. A later, non-adjacent run of observations for the
//! same station starts from scratch.

use serde::Serialize;

use crate::config::AnalyticsConfig;
use crate::observation::Observation;

/// A streak threshold crossing at one position of the input sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreakEvent {
    /// Station whose run crossed the threshold.
    pub station_id: String,
    /// Zero-based position of the triggering observation.
    pub position: usize,
}

/// Events produced by one detection pass, in encounter order.
///
/// An event is emitted on every qualifying observation past the threshold,
/// not only on the first crossing, so long runs repeat their station.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StreakReport {
    /// Rain-streak crossings.
    pub rain: Vec<StreakEvent>,
    /// Temperature-rise-streak crossings.
    pub temperature_rise: Vec<StreakEvent>,
}

/// Run state for the station currently at the scan head.
///
/// `temp_ref` is the bar the next temperature must clear by `rise_step`; it
/// only moves when a rise run breaks.
struct Run<'a> {
    station_id: &'a str,
    rain_run: u32,
    temp_ref: f64,
    rise_run: u32,
}

impl<'a> Run<'a> {
    fn start(obs: &'a Observation) -> Self {
        Self {
            station_id: &obs.station_id,
            rain_run: if obs.precipitation > 0.0 { 1 } else { 0 },
            temp_ref: obs.temperature,
            rise_run: 1,
        }
    }
}

/// Scans the sequence once and reports rain and temperature-rise streaks.
///
/// Rain events fire while `rain_run` strictly exceeds `config.rain_spell()`;
/// rise events fire while `rise_run` reaches `config.rise_spell()` or more.
/// Context-starting observations never fire events, so sequences of length
/// 0 or 1 produce none.
pub fn detect_streaks(observations: &[Observation], config: &AnalyticsConfig) -> StreakReport {
    let mut report = StreakReport::default();
    let mut run: Option<Run<'_>> = None;

    for (position, obs) in observations.iter().enumerate() {
        match &mut run {
            Some(r) if r.station_id == obs.station_id => {
                if obs.temperature - r.temp_ref >= config.rise_step() {
                    r.rise_run += 1;
                } else {
                    r.rise_run = 1;
                    r.temp_ref = obs.temperature;
                }

                if obs.precipitation > 0.0 {
                    r.rain_run += 1;
                } else {
                    r.rain_run = 0;
                }

                if r.rain_run > config.rain_spell() {
                    report.rain.push(StreakEvent {
                        station_id: obs.station_id.clone(),
                        position,
                    });
                }
                if r.rise_run >= config.rise_spell() {
                    report.temperature_rise.push(StreakEvent {
                        station_id: obs.station_id.clone(),
                        position,
                    });
                }
            }
            other => *other = Some(Run::start(obs)),
        }
    }

    report
}
