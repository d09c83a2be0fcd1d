/// Append-only keystroke log.
///
/// Every record is written with its own open-append-close cycle: no handle
/// outlives a single event, so a crash never loses more than the key being
/// written.
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::record::KeyRecord;

/// Log file name, relative to the working directory.
pub const LOG_FILE_NAME: &str = "Record.log";

/// Returns the default log path: `Record.log` in the working directory.
pub fn default_log_path() -> PathBuf {
    PathBuf::from(LOG_FILE_NAME)
}

/// Opens `path` for appending (creating it if absent), writes `record` as one
/// line and closes the file.
pub fn append_record(path: &Path, record: &KeyRecord) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    writeln!(file, "{record}")
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
