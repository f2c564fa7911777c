//! Logging init: stderr only, so the status lines on stdout stay clean.

use tracing_subscriber::EnvFilter;

/// Initialize tracing to stderr. Quiet by default; `RUST_LOG` opts into
/// debug output (e.g. `RUST_LOG=model_dl=debug`).
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
