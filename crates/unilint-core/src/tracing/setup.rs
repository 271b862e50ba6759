use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Environment variable that overrides the configured filter.
pub const ENV_VAR: &str = "UNILINT_LOG";

/// Install the global fmt subscriber, writing to stderr.
///
/// Returns `false` if a subscriber was already installed; the existing one is kept.
pub fn init(config: &LoggingConfig) -> bool {
    let filter =
        EnvFilter::try_from_env(ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.with_target);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_ok()
}
