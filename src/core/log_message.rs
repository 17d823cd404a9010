//! Log message structure

use super::log_level::LogLevel;
use super::log_text::LogText;
use super::timestamp::LogTimestamp;
use serde::{Deserialize, Serialize};

/// A single loggable message: severity, text, and the instant it was created.
///
/// The timestamp is captured when the message is constructed, not when it
/// is delivered, so pre-built messages keep their original time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogMessage {
    pub level: LogLevel,
    pub text: LogText,
    pub timestamp: LogTimestamp,
}

impl LogMessage {
    /// Create a message, capturing the current time
    pub fn new(level: LogLevel, text: impl Into<LogText>) -> Self {
        Self {
            level,
            text: text.into(),
            timestamp: LogTimestamp::now(),
        }
    }

    /// Assemble a message from pre-built parts, keeping the given timestamp
    pub fn from_parts(level: LogLevel, text: impl Into<LogText>, timestamp: LogTimestamp) -> Self {
        Self {
            level,
            text: text.into(),
            timestamp,
        }
    }
}

impl Default for LogMessage {
    fn default() -> Self {
        Self::new(LogLevel::default(), LogText::new())
    }
}
