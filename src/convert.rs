//! Bridging from TOML configuration sections to crate configs.

use std::time::Duration;

use anyhow::{Context, Result};

use aeolus_engine::AnalyticsConfig;
use aeolus_provider::WeatherProvider;

use crate::config::{AnalyticsToml, ProviderToml};

/// Build the engine configuration from its TOML section.
pub fn build_analytics_config(toml: &AnalyticsToml) -> Result<AnalyticsConfig> {
    let config = AnalyticsConfig::new()
        .with_top_n(toml.top_n)
        .with_rise_step(toml.rise_step)
        .with_rise_spell(toml.rise_spell)
        .with_rain_spell(toml.rain_spell);
    config.validate().context("invalid [analytics] section")?;
    Ok(config)
}

/// Build the acquisition client from its TOML section.
///
/// The API key comes from `[provider].api_key`, or from the
/// `AEOLUS_API_KEY` environment variable when the file omits it.
pub fn build_provider(toml: &ProviderToml) -> Result<WeatherProvider> {
    let api_key = match &toml.api_key {
        Some(key) => key.clone(),
        None => std::env::var("AEOLUS_API_KEY").context(
            "no API key: set [provider].api_key or the AEOLUS_API_KEY environment variable",
        )?,
    };

    WeatherProvider::with_timeout(
        &toml.base_url,
        api_key,
        Duration::from_secs(toml.timeout_secs),
    )
    .context("failed to build provider client")
}
