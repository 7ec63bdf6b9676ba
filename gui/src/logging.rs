use elist_core::types::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Builds the subscriber filter, falling back to `info` on a bad directive.
pub fn filter_for(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global fmt subscriber. Fails if one is already set.
pub fn init(
    config: &LoggingConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(config))
        .with_target(false)
        .compact()
        .try_init()
}
