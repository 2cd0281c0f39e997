//! Logging setup
//!
//! Library code logs through `tracing` macros only. The binary installs a
//! subscriber writing to stderr so log lines never mix with a document
//! printed on stdout.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{Error, Result};

/// Environment variable overriding the verbosity flags, in `EnvFilter` syntax.
pub const LOG_ENV: &str = "DIRDOC_LOG";

/// Default level for a `-v` count.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the filter from `DIRDOC_LOG` when set, else from the verbosity.
pub fn build_env_filter(verbosity: u8, env_value: Option<&str>) -> Result<EnvFilter> {
    match env_value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(spec) => EnvFilter::try_new(spec)
            .map_err(|e| Error::Logging(format!("invalid {}: {}", LOG_ENV, e))),
        None => Ok(EnvFilter::new(level_for_verbosity(verbosity))),
    }
}

/// Install the global subscriber. Call once, at startup.
pub fn init_logging(verbosity: u8) -> Result<()> {
    let env_value = std::env::var(LOG_ENV).ok();
    let filter = build_env_filter(verbosity, env_value.as_deref())?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}
