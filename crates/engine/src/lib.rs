//! # aeolus-engine
//!
//! Analytics over an ordered sequence of weather observations: extremal
//! station rankings, per-month aggregates, whole-dataset averages, and a
//! single-pass streak detector for rain runs and temperature-rise runs.
//!
//! # Pipeline
//!
//! ```text
//!  ┌───────────────┐     ┌─────────────────┐     ┌─────────────────┐
//!  │  group_by     │────▶│ top_n/bottom_n  │────▶│                 │
//!  │  (partition)  │     │ (rank)          │     │                 │
//!  └───────────────┘     └─────────────────┘     │ AnalyticsReport │
//!  ┌─────────────────────────────────────┐       │                 │
//!  │  detect_streaks (sequential scan)   │──────▶│                 │
//!  └─────────────────────────────────────┘       └─────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use aeolus_engine::{analyze, AnalyticsConfig, Observation};
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let observations = vec![
//!     Observation::new(date, "London", "light rain", 17.0, 72.0, 4.1, 0.4),
//!     Observation::new(date, "Paris", "clear sky", 24.0, 48.0, 2.3, 0.0),
//! ];
//!
//! let report = analyze(&observations, &AnalyticsConfig::new()).unwrap();
//! assert_eq!(report.hottest_stations[0].station_id, "Paris");
//! ```
//!
//! The engine performs no I/O, holds no state between invocations, and
//! treats its input as an immutable snapshot; the returned report is a plain
//! value safe to move across threads.

pub mod config;
pub mod engine;
pub mod error;
pub mod grouping;
pub mod observation;
pub mod ranking;
pub mod report;
pub mod stats;
pub mod streak;
pub mod summary;

pub use config::AnalyticsConfig;
pub use engine::analyze;
pub use error::AnalyticsError;
pub use observation::{Observation, month_name};
pub use report::{AnalyticsReport, MonthlyStats, MonthlyWind, StationMetric, to_json};
pub use streak::{StreakEvent, StreakReport, detect_streaks};
pub use summary::DatasetAverages;
