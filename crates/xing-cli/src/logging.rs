//! Diagnostic output for the command line
//!
//! xing-core logs through the `log` facade. The subscriber installed here
//! picks those records up through the `tracing-log` bridge and writes them
//! to stderr, leaving stdout to command output.

use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "warn,xing_core=debug,xing_cli=debug"
    } else {
        "warn"
    }
}

fn create_env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber. Only the first call takes effect.
pub fn init_logging(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(create_env_filter(verbose))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .without_time(),
        )
        .try_init();
}
