use tracing_subscriber::EnvFilter;

/// Workspace crates whose events are shown.
const CRATE_TARGETS: &[&str] = &[
    "nissan",
    "nissan_calendar",
    "nissan_drift",
    "nissan_ephemeris",
];

/// Maps the `-v` count to a level: warn, info, debug, then trace.
fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn default_directives(verbosity: u8) -> String {
    let level = level(verbosity);
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize tracing on stderr; stdout carries the JSON reports.
///
/// `RUST_LOG` overrides the verbosity flag if set.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
