use std::env;

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub fn default_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Initialize the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` wins over `verbose`. Calling this twice is harmless; the second
/// subscriber is simply not installed.
pub fn init(verbose: bool) {
    let env_filter = env::var("RUST_LOG").map_or_else(
        |_| EnvFilter::new(default_level(verbose)),
        |directive| EnvFilter::new(&directive),
    );

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
