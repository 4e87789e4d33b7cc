//! Report command: fetch current observations and analyze them in one run.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use aeolus_engine::{analyze, to_json};

use crate::cli::ReportArgs;
use crate::{config, convert, render};

/// Run acquisition followed by analytics and print both outputs.
pub fn run(args: ReportArgs) -> Result<()> {
    let _cmd = info_span!("report").entered();

    let cfg = config::load(&args.config)?;
    let provider = convert::build_provider(&cfg.provider)?;
    let analytics_cfg = convert::build_analytics_config(&cfg.analytics)?;

    info!(
        n_stations = cfg.stations.len(),
        "fetching current observations"
    );
    let observations = provider.fetch_all(&cfg.stations);
    info!(n_observations = observations.len(), "acquisition complete");

    print!("{}", render::render_observations(&observations));

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
