//! Logging init: stderr via tracing-subscriber, filtered by RUST_LOG.

use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr. Quiet by default so stdout stays pipeable;
/// set `RUST_LOG` (e.g. `RUST_LOG=refang_core=debug`) for more detail.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
