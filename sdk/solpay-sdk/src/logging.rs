use tracing_subscriber::{fmt, EnvFilter};

/// Install a stderr fmt subscriber filtered by `RUST_LOG` (default `info`).
/// Repeated calls are no-ops.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
