use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "PLANTBOOK_LOG";

/// Install the stderr subscriber. `PLANTBOOK_LOG` (an `EnvFilter` directive) wins over
/// `--verbose`.
pub fn init(verbose: bool) {
    let fallback = if verbose { "plantbook=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    // An already installed global subscriber stays in place.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
