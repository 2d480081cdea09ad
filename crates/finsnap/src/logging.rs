//! File-backed logging for the dashboard.
//!
//! The TUI owns the terminal, so log output goes to `{data_dir}/finsnap.log`
//! instead. The app emits a handful of lines per analysis cycle, so rotation
//! is a one-generation scheme checked once at startup: an oversized log is
//! renamed to `finsnap.log.1` (replacing any previous generation) and a
//! fresh file is started.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// A log larger than this at startup is rotated out.
const ROTATE_AT_BYTES: u64 = 1024 * 1024;

/// Rename an oversized log to its `.log.1` generation, replacing whatever
/// generation was there before. A missing log is fine.
fn rotate_if_oversized(log_path: &Path) -> std::io::Result<()> {
    let size = match std::fs::metadata(log_path) {
        Ok(metadata) => metadata.len(),
        Err(_) => return Ok(()),
    };
    if size <= ROTATE_AT_BYTES {
        return Ok(());
    }
    std::fs::rename(log_path, log_path.with_extension("log.1"))
}

/// Initialize logging to `{data_dir}/finsnap.log`.
///
/// The level can be set via the `level` parameter or overridden entirely
/// with `RUST_LOG`.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    std::fs::create_dir_all(data_dir)?;
    let log_path = data_dir.join("finsnap.log");

    if let Err(e) = rotate_if_oversized(&log_path) {
        eprintln!("Warning: could not rotate log file: {e}");
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("finsnap={level},finsnap_core=warn")));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Arc::new(file)).with_ansi(false))
        .init();

    tracing::info!(path = %log_path.display(), "Logging initialized");
    Ok(())
}
