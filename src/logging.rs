//! Logging setup for the trucli binary.
//!
//! The shell shares the terminal with its user, so logs go to a file unless
//! stderr is asked for explicitly.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset or invalid.
const DEFAULT_LEVEL: &str = "info";

/// Where log records are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Truncated and rewritten on each run.
    File(PathBuf),
    Stderr,
}

impl Default for LogTarget {
    fn default() -> Self {
        Self::File(default_log_path())
    }
}

/// Installs the global subscriber for `target`.
///
/// Fails only when the log file cannot be created; the caller decides
/// whether to continue without logging.
pub fn init(target: &LogTarget) -> io::Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter());
    match target {
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            builder.with_writer(file).with_ansi(false).init();
        }
        LogTarget::Stderr => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Creates the log file and any missing parent directories.
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}

/// `trucli.log` under the platform state directory, falling back to the
/// config directory and then the temp directory.
pub fn default_log_path() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("trucli").join("trucli.log"))
        .unwrap_or_else(|| std::env::temp_dir().join("trucli.log"))
}
