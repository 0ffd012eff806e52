//! vitals — a desktop system-resource monitor.
//!
//! Run with:  `RUST_LOG=info vitals`

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use vitals_config::Settings;

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("vitals v{} starting", env!("CARGO_PKG_VERSION"));

    vitals_ui::run(Settings::default()).map_err(Into::into)
}
