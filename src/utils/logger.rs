use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initializes the global tracing subscriber.
///
/// Respects `RUST_LOG`; falls back to `info`. Safe to call more than once,
/// only the first call installs the subscriber.
pub fn setup_logger() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
    });
}
