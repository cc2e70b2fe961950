use tracing_subscriber::EnvFilter;

/// Initializes structured logging.
///
/// Verbosity comes from `RUST_LOG` (for example `RUST_LOG=order_intake=debug`) and
/// falls back to `info` when the variable is unset or invalid.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
