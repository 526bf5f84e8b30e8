//! Terminal presentation for the `todoz` binary: logging setup and rendering.
//! Not part of the library API.

pub mod print;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV: &str = "TODOZ_LOG";

/// Installs the tracing subscriber. Logs go to stderr so rendered output on
/// stdout stays clean.
///
/// Reads `TODOZ_LOG`; defaults to `warn`, or `debug` with `--verbose`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "todoz=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
