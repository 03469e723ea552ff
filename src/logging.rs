use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset. The console report on stdout is the main output.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs a compact stderr subscriber filtered by `RUST_LOG`.
///
/// Calling this more than once keeps the first subscriber.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Unable to initialise logging. Error: {}", e);
    }
}
