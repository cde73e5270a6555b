use tracing_subscriber::EnvFilter;
use super::SystemConfig;

/// Configure tracing once at application startup.
///
/// `RUST_LOG` wins when set; otherwise the configured filter is used.
/// Calling this again is a no-op.
pub fn setup_tracing(config: &SystemConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .try_init();
}
