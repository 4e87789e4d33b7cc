//! Logging setup for the aeolus binary.
//!
//! The repeated `-v` flag raises the level for the aeolus workspace crates
//! only, so chatty third-party crates stay quiet even at `-vvv`. A set
//! `RUST_LOG` environment variable replaces the derived filter wholesale.

use tracing_subscriber::EnvFilter;

/// Targets covered by the verbosity flag: the binary and its library crates.
const TARGETS: [&str; 3] = ["aeolus", "aeolus_engine", "aeolus_provider"];

/// Installs the global tracing subscriber.
pub fn init(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(verbose)));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// One `target=level` directive per workspace crate. Levels start at `warn`
/// and step through `info`, `debug`, and `trace` as `-v` repeats.
fn directives(verbose: u8) -> String {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
