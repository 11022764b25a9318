//! Logging setup via the `tracing` ecosystem.
//!
//! Embedding applications that already install a subscriber can skip this;
//! everything in the workspace logs through `tracing` macros either way.

use bopcompat_core::CompatConfig;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config says otherwise.
pub const DEFAULT_FILTER: &str = "info";

/// Build the filter: `RUST_LOG` wins, then the config's `logLevel`.
#[must_use]
pub fn env_filter(config: Option<&CompatConfig>) -> EnvFilter {
    let filter_str = config
        .map(|c| c.log_level.trim())
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_FILTER);

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str))
}

/// Install a console subscriber. Returns `false` if one was already set.
pub fn init_logging(config: Option<&CompatConfig>) -> bool {
    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(console_layer)
        .try_init()
        .is_ok()
}
