//! Tracing setup
//!
//! `RUST_LOG` controls the filter (default: info).

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
}
