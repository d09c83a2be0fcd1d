use std::fmt;

/// One keystroke as it appears in the log: `<timestamp_ms> <name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRecord {
    /// Milliseconds since the Unix epoch.
    pub timestamp_ms: i64,
    /// OS display name of the key. May contain spaces ("Caps Lock").
    pub name: String,
}

impl KeyRecord {
    pub fn new(timestamp_ms: i64, name: impl Into<String>) -> Self {
        Self { timestamp_ms, name: name.into() }
    }
}

impl fmt::Display for KeyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.timestamp_ms, self.name)
    }
}

/// Source of wall-clock time in milliseconds since the Unix epoch.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}
