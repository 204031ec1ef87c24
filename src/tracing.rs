//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize tracing to stderr, leaving stdout for command output.
/// Safe to call multiple times.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

        if let Err(e) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .compact()
            .try_init()
        {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}
