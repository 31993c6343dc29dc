//! Logging setup for the command-line driver.
//!
//! Installs a global tracing subscriber that writes to stderr, keeping
//! stdout free for the rendered tree and the accuracy report. `RUST_LOG`
//! takes precedence over the verbosity flags.

use crate::error::CliError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

/// Default filter for the given verbosity flags.
fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    }
}

fn build_env_filter(verbose: bool, quiet: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)))
}

/// Initialize tracing for this process.
pub(crate) fn init(verbose: bool, quiet: bool) -> Result<(), CliError> {
    let stderr_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);
    let subscriber = Registry::default()
        .with(build_env_filter(verbose, quiet))
        .with(stderr_layer);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| CliError::Logging(e.to_string()))
}
