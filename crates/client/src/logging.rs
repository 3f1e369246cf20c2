//! File-based tracing setup.
//!
//! The terminal is owned by the TUI, so logs go only to a per-session file.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::{Builder, LevelFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::ClientConfig;

/// Initialise the global subscriber and return the session log directory.
///
/// The filter comes from `RUST_LOG`, defaulting to `info` when unset. Hold the
/// returned guard until exit; dropping it flushes buffered lines to the file.
pub fn setup_logging(config: &ClientConfig) -> Result<(PathBuf, WorkerGuard)> {
    let root = config.log_dir.clone().unwrap_or_else(default_log_directory);
    let session_id = config.resolved_session_id();
    let session_log_dir = prepare_session_dir(&root, &session_id)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = filter_builder().from_env_lossy();

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!(session = %session_id, "logging initialized");
    tracing::info!("log file: {}/client.log", session_log_dir.display());

    Ok((session_log_dir, guard))
}

fn filter_builder() -> Builder {
    EnvFilter::builder().with_default_directive(LevelFilter::INFO.into())
}

/// Create `<root>/<session_id>` and return it.
pub fn prepare_session_dir(root: &Path, session_id: &str) -> Result<PathBuf> {
    let dir = root.join(session_id);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    Ok(dir)
}

/// Platform cache directory for logs, falling back to the temp dir.
pub fn default_log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "duel")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("duel").join("logs"))
}
