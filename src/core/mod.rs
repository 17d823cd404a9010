//! Core logger types

pub mod error;
pub mod formatter;
pub mod identity;
pub mod log_level;
pub mod log_message;
pub mod log_text;
pub mod logger;
pub mod timestamp;
pub mod tokens;

pub use error::{LoggerError, Result};
pub use formatter::{
    render_template, MessageFormatter, DEFAULT_TEMPLATE, TOKEN_ASCTIME, TOKEN_DEVICE, TOKEN_LEVEL,
    TOKEN_LOGIN, TOKEN_MESSAGE,
};
pub use identity::{IdentityResolver, OsIdentity, StaticIdentity};
pub use log_level::LogLevel;
pub use log_message::LogMessage;
pub use log_text::LogText;
pub use logger::{Logger, Sinks};
pub use timestamp::{LogTimestamp, ASCTIME_FORMAT};
