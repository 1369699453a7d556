use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_DIRECTIVES: &str = "echo_viewer=info,echo_api=info";
const VERBOSE_DIRECTIVES: &str = "echo_viewer=debug,echo_api=debug";

/// Installs the fmt subscriber. `log` records from `echo_api` are bridged in.
/// `RUST_LOG` wins over `verbose` when set.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose {
        VERBOSE_DIRECTIVES
    } else {
        DEFAULT_DIRECTIVES
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    fmt().with_env_filter(filter).with_target(true).init();
}
