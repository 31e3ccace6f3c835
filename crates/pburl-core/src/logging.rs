//! Tracing setup for the `pburl` binary.
//!
//! Events go to `~/.local/state/pburl/pburl.log`; when that cannot be opened
//! the caller falls back to [`init_logging_stderr`]. `RUST_LOG` overrides the
//! default filter in both cases.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// `pburl` is a target prefix, so it also covers `pburl_core`.
const DEFAULT_FILTER: &str = "info,pburl=debug";
const LOG_FILE_NAME: &str = "pburl.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Location of the log file under the XDG state dir.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pburl")?;
    Ok(xdg_dirs.get_state_home().join(LOG_FILE_NAME))
}

/// Open `path` for appending, creating its parent directory first.
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open {}", path.display()))
}

/// Install the file subscriber. Errors leave no subscriber installed.
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {e}"))?;

    tracing::info!("pburl logging initialized at {}", path.display());
    Ok(())
}

/// Stderr-only subscriber; a no-op if one is already installed.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
