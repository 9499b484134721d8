use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "fintrack.log";
const LOG_FILTER_VAR: &str = "FINTRACK_LOG";
const DEFAULT_LOG_FILTER: &str = "fintrack=info";

/// Platform data directory for the application.
pub(crate) fn data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "fintrack", "Fintrack")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

pub(crate) fn log_file_path(dir: &Path) -> PathBuf {
    dir.join(LOG_FILE_NAME)
}

pub(crate) fn open_log_file(dir: &Path) -> Result<File> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
    let path = log_file_path(dir);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}

/// Install the global subscriber, writing plain-text events to the log file
/// in `dir`. The terminal is left alone since the TUI draws over stdout.
/// The filter comes from `FINTRACK_LOG`, defaulting to `fintrack=info`.
pub(crate) fn init(dir: &Path) -> Result<PathBuf> {
    let file = open_log_file(dir)?;
    let filter = EnvFilter::try_from_env(LOG_FILTER_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    Ok(log_file_path(dir))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::io::Write;

    use super::*;

    #[test]
    fn test_open_log_file_creates_nested_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("a").join("b");
        let mut file = open_log_file(&dir).unwrap();
        writeln!(file, "hello").unwrap();
        assert!(log_file_path(&dir).exists());
    }

    #[test]
    fn test_open_log_file_appends() {
        let tmp = tempfile::tempdir().unwrap();
        writeln!(open_log_file(tmp.path()).unwrap(), "first").unwrap();
        writeln!(open_log_file(tmp.path()).unwrap(), "second").unwrap();
        let contents = std::fs::read_to_string(log_file_path(tmp.path())).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }
}
