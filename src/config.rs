use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level aeolus configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AeolusConfig {
    /// Stations to monitor, one provider request each.
    #[serde(default = "default_stations")]
    pub stations: Vec<String>,

    /// Weather data provider settings.
    #[serde(default)]
    pub provider: ProviderToml,

    /// Analytics thresholds.
    #[serde(default)]
    pub analytics: AnalyticsToml,
}

/// Loads and parses the TOML configuration file.
pub fn load(path: &Path) -> Result<AeolusConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

fn default_stations() -> Vec<String> {
    ["London", "Paris", "Berlin", "New York", "Tokyo"]
        .map(String::from)
        .to_vec()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderToml {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// May be omitted in favour of the `AEOLUS_API_KEY` environment variable.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderToml {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    aeolus_provider::DEFAULT_BASE_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyticsToml {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_rise_step")]
    pub rise_step: f64,
    #[serde(default = "default_rise_spell")]
    pub rise_spell: u32,
    #[serde(default = "default_rain_spell")]
    pub rain_spell: u32,
}

impl Default for AnalyticsToml {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            rise_step: default_rise_step(),
            rise_spell: default_rise_spell(),
            rain_spell: default_rain_spell(),
        }
    }
}

fn default_top_n() -> usize {
    10
}
fn default_rise_step() -> f64 {
    5.0
}
fn default_rise_spell() -> u32 {
    5
}
fn default_rain_spell() -> u32 {
    7
}
