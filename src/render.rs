//! Text rendering of observations and analytics reports.
//!
//! Pure, read-only consumers of the engine's output; every function returns
//! a string so commands decide where it goes.

use aeolus_engine::{AnalyticsReport, Observation, StationMetric, StreakEvent};

/// Renders the raw observation sequence as an aligned table.
pub fn render_observations(observations: &[Observation]) -> String {
    let mut lines = Vec::with_capacity(observations.len() + 2);
    lines.push(format!(
        "{:<12} {:<14} {:>7} {:>7} {:>7} {:>8}  {}",
        "DATE", "STATION", "TEMP", "HUM", "WIND", "PRECIP", "CONDITIONS"
    ));

    for obs in observations {
        lines.push(format!(
            "{:<12} {:<14} {:>7.1} {:>7.1} {:>7.1} {:>8.2}  {}",
            obs.date.to_string(),
            obs.station_id,
            obs.temperature,
            obs.humidity,
            obs.wind_speed,
            obs.precipitation,
            obs.description
        ));
    }
    if observations.is_empty() {
        lines.push("  (no observations)".to_string());
    }

    lines.join("\n") + "\n"
}

/// Renders the full analytics report as labelled sections.
pub fn render_report(report: &AnalyticsReport) -> String {
    let mut lines = Vec::new();

    lines.push("Hottest stations".to_string());
    push_ranking(&mut lines, &report.hottest_stations);
    lines.push("Coldest stations".to_string());
    push_ranking(&mut lines, &report.coldest_stations);
    lines.push("Most humid stations".to_string());
    push_ranking(&mut lines, &report.most_humid_stations);

    lines.push("Monthly statistics".to_string());
    if report.monthly.is_empty() {
        lines.push("  (none)".to_string());
    }
    for m in &report.monthly {
        lines.push(format!(
            "  {}: avg temperature {:.1}, avg humidity {:.1}, total precipitation {:.1}",
            m.month, m.avg_temperature, m.avg_humidity, m.total_precipitation
        ));
    }

    match &report.windiest_month {
        Some(w) => lines.push(format!(
            "Month with highest average wind speed: {} ({:.1})",
            w.month, w.avg_wind_speed
        )),
        None => lines.push("Month with highest average wind speed: (none)".to_string()),
    }

    lines.push("Rain streaks".to_string());
    push_events(&mut lines, &report.rain_streaks);
    lines.push("Temperature rise streaks".to_string());
    push_events(&mut lines, &report.temperature_rise_streaks);

    lines.push(format!(
        "Averages: temperature {:.1}, humidity {:.1}, wind speed {:.1}",
        report.averages.temperature, report.averages.humidity, report.averages.wind_speed
    ));

    lines.join("\n") + "\n"
}

fn push_ranking(lines: &mut Vec<String>, ranking: &[StationMetric]) {
    if ranking.is_empty() {
        lines.push("  (none)".to_string());
        return;
    }
    for (i, entry) in ranking.iter().enumerate() {
        lines.push(format!(
            "  {:>2}. {:<14} {:>7.1}",
            i + 1,
            entry.station_id,
            entry.value
        ));
    }
}

fn push_events(lines: &mut Vec<String>, events: &[StreakEvent]) {
    if events.is_empty() {
        lines.push("  (none)".to_string());
        return;
    }
    for e in events {
        lines.push(format!("  {} at observation {}", e.station_id, e.position));
    }
}
