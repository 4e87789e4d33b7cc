//! Fetch command: acquire current observations for the configured stations.

use anyhow::Result;
use tracing::{info, info_span};

use crate::cli::FetchArgs;
use crate::{config, convert, render, store};

/// Run the acquisition pipeline and print the observation table.
pub fn run(args: FetchArgs) -> Result<()> {
    let _cmd = info_span!("fetch").entered();

    let cfg = config::load(&args.config)?;
    let provider = convert::build_provider(&cfg.provider)?;

    info!(
        n_stations = cfg.stations.len(),
        "fetching current observations"
    );
    let observations = provider.fetch_all(&cfg.stations);
    info!(n_observations = observations.len(), "acquisition complete");

    print!("{}", render::render_observations(&observations));

    if let Some(path) = &args.output {
        store::write_observations(path, &observations)?;
        info!(path = %path.display(), "observations written");
    }

    Ok(())
}
