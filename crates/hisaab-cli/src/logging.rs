use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "hisaab_core=warn";
const VERBOSE_FILTER: &str = "hisaab_core=debug";

/// Install the stderr subscriber. `RUST_LOG` wins unless `--verbose` is set.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
