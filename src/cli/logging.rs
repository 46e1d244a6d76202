use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber: `debug` when verbose, `warn` otherwise.
///
/// The filter is built from the flag alone; `RUST_LOG` is not consulted.
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::new(format!("locale_tools={}", level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
