use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Verbosity comes from `RUST_LOG` (e.g. `RUST_LOG=jpashop=debug`) and
/// defaults to `warn` so the REPL output stays readable. Events go to
/// stderr. Calling this twice is harmless.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
