use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;

use crate::keys::{KeyCode, FIRST_KEY_CODE, LAST_KEY_CODE};
use crate::log_file;

/// Codes checked between two pauses.
pub const DEFAULT_SWEEP_WIDTH: usize = 50;
/// Pause after each batch of codes.
pub const DEFAULT_SWEEP_PAUSE: Duration = Duration::from_millis(1);

/// Polling parameters. There is no config file; callers tweak these in code.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// First polled key code.
    pub first_code: KeyCode,
    /// Last polled key code (inclusive).
    pub last_code: KeyCode,
    /// Number of codes checked before each pause. Zero is treated as one.
    pub sweep_width: usize,
    /// Sleep after each batch.
    pub sweep_pause: Duration,
    /// Log file the records are appended to.
    pub log_path: PathBuf,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            first_code: FIRST_KEY_CODE,
            last_code: LAST_KEY_CODE,
            sweep_width: DEFAULT_SWEEP_WIDTH,
            sweep_pause: DEFAULT_SWEEP_PAUSE,
            log_path: log_file::default_log_path(),
        }
    }
}

impl PollConfig {
    /// The polled code range. Empty when `first_code > last_code`.
    pub fn codes(&self) -> RangeInclusive<KeyCode> {
        self.first_code..=self.last_code
    }

    /// Splits [`codes`](Self::codes) into batches of `sweep_width` codes.
    pub fn batches(&self) -> Vec<Vec<KeyCode>> {
        let codes: Vec<KeyCode> = self.codes().collect();
        codes
            .chunks(self.sweep_width.max(1))
            .map(<[KeyCode]>::to_vec)
            .collect()
    }
}
