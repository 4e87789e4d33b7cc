//! Reading and writing observation sequences as JSON files.
//!
//! The file format is a plain JSON array of observations. Order in the file
//! is the order the engine sees, so streak semantics survive a round trip.

use std::path::Path;

use anyhow::{Context, Result};

use aeolus_engine::Observation;

/// Reads an observation sequence from a JSON file, preserving order.
pub fn read_observations(path: &Path) -> Result<Vec<Observation>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read observations: {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("failed to parse observations: {}", path.display()))
}

/// Writes an observation sequence to a JSON file.
pub fn write_observations(path: &Path, observations: &[Observation]) -> Result<()> {
    let json = serde_json::to_string_pretty(observations)
        .context("failed to serialize observations")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write observations: {}", path.display()))?;
    Ok(())
}
