//! Tracing setup for the command line binary.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::pathfinder::tools::error::{Result, ToolError};

/// Maps the number of `-v` flags to a default level.
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs a compact stderr subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity-derived level. Fails if a
/// global subscriber is already set.
pub fn init(verbosity: u8) -> Result<()> {
    let fallback = level_for_verbosity(verbosity).to_string().to_lowercase();
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}
