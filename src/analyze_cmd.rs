//! Analyze command: run the engine over a stored observation sequence.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use aeolus_engine::{analyze, to_json};

use crate::cli::AnalyzeArgs;
use crate::{config, convert, render, store};

/// Run the analytics pipeline over observations read from disk.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let _cmd = info_span!("analyze").entered();

    let cfg = config::load(&args.config)?;
    let analytics_cfg = convert::build_analytics_config(&cfg.analytics)?;

    let observations = store::read_observations(&args.input)?;
    info!(
        n_observations = observations.len(),
        path = %args.input.display(),
        "observations loaded"
    );

    let report = analyze(&observations, &analytics_cfg).context("analysis failed")?;
    print!("{}", render::render_report(&report));

    if let Some(path) = &args.json {
        let json = to_json(&report)?;
        std::fs::write(path, &json)
            .with_context(|| format!("failed to write report: {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }

    Ok(())
}
