//! Configuration for the analytics engine.

use crate::error::AnalyticsError;

/// Thresholds and sizes used by ranking and streak detection.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use aeolus_engine::AnalyticsConfig;
///
/// let config = AnalyticsConfig::new().with_top_n(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct AnalyticsConfig {
    top_n: usize,
    rise_step: f64,
    rise_spell: u32,
    rain_spell: u32,
}

impl AnalyticsConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `top_n = 10`, `rise_step = 5.0`, `rise_spell = 5`,
    /// `rain_spell = 7`.
    pub fn new() -> Self {
        Self {
            top_n: 10,
            rise_step: 5.0,
            rise_spell: 5,
            rain_spell: 7,
        }
    }

    /// Sets the number of stations kept in each extremal ranking.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Sets the minimum temperature gain over the reference that keeps a
    /// rise run alive.
    pub fn with_rise_step(mut self, rise_step: f64) -> Self {
        self.rise_step = rise_step;
        self
    }

    /// Sets the run length at which temperature-rise events start firing
    /// (inclusive).
    pub fn with_rise_spell(mut self, rise_spell: u32) -> Self {
        self.rise_spell = rise_spell;
        self
    }

    /// Sets the run length a rain run must strictly exceed before rain
    /// events fire.
    pub fn with_rain_spell(mut self, rain_spell: u32) -> Self {
        self.rain_spell = rain_spell;
        self
    }

    // --- Accessors ---

    /// Returns the ranking size.
    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Returns the temperature-rise step in degrees.
    pub fn rise_step(&self) -> f64 {
        self.rise_step
    }

    /// Returns the inclusive rise-run event threshold.
    pub fn rise_spell(&self) -> u32 {
        self.rise_spell
    }

    /// Returns the exclusive rain-run event threshold.
    pub fn rain_spell(&self) -> u32 {
        self.rain_spell
    }

    /// Validates this configuration.
    ///
    /// Checks that `top_n`, `rise_spell`, and `rain_spell` are at least 1
    /// and that `rise_step` is finite.
    pub fn validate(&self) -> Result<(), AnalyticsError> {
        if self.top_n == 0 {
            return Err(AnalyticsError::InvalidConfig {
                reason: "top_n must be at least 1".to_string(),
            });
        }
        if !self.rise_step.is_finite() {
            return Err(AnalyticsError::InvalidConfig {
                reason: format!("rise_step must be finite, got {}", self.rise_step),
            });
        }
        if self.rise_spell == 0 {
            return Err(AnalyticsError::InvalidConfig {
                reason: "rise_spell must be at least 1".to_string(),
            });
        }
        if self.rain_spell == 0 {
            return Err(AnalyticsError::InvalidConfig {
                reason: "rain_spell must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self::new()
    }
}
