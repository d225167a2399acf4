//! Logger setup for the command-line entry point

use env_logger::Env;

use crate::io::configuration::{DEFAULT_LOG_LEVEL, QUIET_LOG_LEVEL};

/// Default filter for the given verbosity
pub const fn default_filter(quiet: bool) -> &'static str {
    if quiet {
        QUIET_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    }
}

/// Install `env_logger` as the global logger
///
/// `RUST_LOG` takes precedence over the default filter. Returns `false` if
/// a logger was already installed, which leaves the existing one in place.
pub fn init_logging(quiet: bool) -> bool {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter(quiet)))
        .format_timestamp(None)
        .try_init()
        .is_ok()
}
