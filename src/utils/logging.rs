use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber. `RUST_LOG` wins when set; otherwise
/// the debug flag selects between debug and info level output.
pub fn init_logging(debug_logging: bool) {
    let default_level = if debug_logging { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
