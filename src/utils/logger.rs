use tracing_subscriber::EnvFilter;

/// Initializes the process-wide tracing subscriber
///
/// The filter comes from `RUST_LOG` when set, otherwise `info`. Only the
/// first call installs a subscriber; later calls are no-ops so tests can set
/// up logging freely.
pub fn setup_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
