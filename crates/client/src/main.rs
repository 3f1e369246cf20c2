//! Duel client binary.
//!
//! Composition root: loads configuration, installs logging, and hands control
//! to the terminal UI.
//!
//! ```bash
//! DUEL_SEED=42 RUST_LOG=debug cargo run -p duel-client
//! ```

use anyhow::Result;
use duel_client::{ClientConfig, DuelApp, logging};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let (log_dir, _log_guard) = logging::setup_logging(&config)?;

    tracing::info!("Starting duel client");
    tracing::debug!("Logs in {}", log_dir.display());

    DuelApp::new(config)?.run()?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
