//! # Template Logger
//!
//! A minimal, template-driven Rust logging library with token substitution
//! and dual file/console output.
//!
//! ## Features
//!
//! - **Template Formatting**: Log lines shaped by a user template with
//!   `%asctime%`, `%level%`, `%message%`, `%login%`, and `%device%` tokens
//! - **Dual Output**: Append-mode log file plus an optional console mirror
//! - **Thread Safe**: A `Logger` can be shared across threads as-is
//! - **Easy to Use**: Simple and intuitive API
//!
//! ## Quick start
//!
//! ```no_run
//! use template_logger::{Logger, LogLevel, Sinks};
//!
//! let logger = Logger::new("app.log");
//! logger.info("server started").unwrap();
//! logger.log(LogLevel::Error, "listener died", Sinks::BOTH).unwrap();
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        IdentityResolver, LogLevel, LogMessage, LogText, LogTimestamp, Logger, LoggerError,
        MessageFormatter, OsIdentity, Result, Sinks, StaticIdentity,
    };
    pub use crate::sinks::{ConsoleSink, FileSink};
}

pub use crate::core::tokens;
pub use crate::core::{
    render_template, IdentityResolver, LogLevel, LogMessage, LogText, LogTimestamp, Logger,
    LoggerError, MessageFormatter, OsIdentity, Result, Sinks, StaticIdentity, ASCTIME_FORMAT,
    DEFAULT_TEMPLATE, TOKEN_ASCTIME, TOKEN_DEVICE, TOKEN_LEVEL, TOKEN_LOGIN, TOKEN_MESSAGE,
};
pub use crate::sinks::{ConsoleSink, FileSink};
