//! Timestamp capture and rendering
//!
//! A timestamp is captured once when a log message is created and
//! rendered on demand when the `%asctime%` token is substituted.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// strftime pattern used for the `%asctime%` token
pub const ASCTIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A wall-clock instant in local time.
///
/// Holds both the broken-down local time and the epoch seconds behind
/// it, taken from a single time sample, so callers can render a
/// human-readable form or compare instants numerically.
///
/// # Examples
///
/// ```
/// use template_logger::LogTimestamp;
///
/// let stamp = LogTimestamp::now();
/// let rendered = stamp.asctime();
/// // "2025-01-08 10:30:45"
/// assert_eq!(rendered.len(), 19);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LogTimestamp {
    instant: DateTime<Local>,
}

impl LogTimestamp {
    /// Capture the current local time
    #[must_use]
    pub fn now() -> Self {
        Self {
            instant: Local::now(),
        }
    }

    /// Build a timestamp from a given local time, deriving the epoch
    /// seconds from it. Useful for pre-built messages and pinned tests.
    #[must_use]
    pub fn from_local(instant: DateTime<Local>) -> Self {
        Self { instant }
    }

    /// Render as `YYYY-MM-DD HH:MM:SS`, the form used for `%asctime%`
    #[must_use]
    pub fn asctime(&self) -> String {
        self.instant.format(ASCTIME_FORMAT).to_string()
    }

    /// Render with a custom strftime format string
    #[must_use]
    pub fn format(&self, format_str: &str) -> String {
        self.instant.format(format_str).to_string()
    }

    /// The captured local calendar time
    #[must_use]
    pub fn local(&self) -> DateTime<Local> {
        self.instant
    }

    /// Seconds since the Unix epoch
    #[must_use]
    pub fn epoch(&self) -> i64 {
        self.instant.timestamp()
    }
}

impl Default for LogTimestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl From<DateTime<Local>> for LogTimestamp {
    fn from(instant: DateTime<Local>) -> Self {
        Self::from_local(instant)
    }
}

impl fmt::Display for LogTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.asctime())
    }
}
