//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. They deliver
//! to the logger's default sinks and return the delivery `Result`.
//!
//! # Examples
//!
//! ```no_run
//! use template_logger::prelude::*;
//! use template_logger::info;
//!
//! let logger = Logger::new("app.log");
//!
//! // Basic logging
//! info!(logger, "Server started").unwrap();
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```no_run
/// # use template_logger::prelude::*;
/// # let logger = Logger::new("app.log");
/// use template_logger::log;
/// log!(logger, LogLevel::Info, "Simple message").unwrap();
/// log!(logger, LogLevel::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+), $crate::Sinks::default())
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```no_run
/// # use template_logger::prelude::*;
/// # let logger = Logger::new("app.log");
/// use template_logger::debug;
/// debug!(logger, "Debug information").unwrap();
/// debug!(logger, "Counter value: {}", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```no_run
/// # use template_logger::prelude::*;
/// # let logger = Logger::new("app.log");
/// use template_logger::info;
/// info!(logger, "Application started").unwrap();
/// info!(logger, "Processing {} items", 100).unwrap();
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```no_run
/// # use template_logger::prelude::*;
/// # let logger = Logger::new("app.log");
/// use template_logger::warn;
/// warn!(logger, "Low disk space").unwrap();
/// warn!(logger, "Retry attempt {} of {}", 3, 5).unwrap();
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```no_run
/// # use template_logger::prelude::*;
/// # let logger = Logger::new("app.log");
/// use template_logger::error;
/// error!(logger, "Failed to connect to database").unwrap();
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message.
///
/// # Examples
///
/// ```no_run
/// # use template_logger::prelude::*;
/// # let logger = Logger::new("app.log");
/// use template_logger::critical;
/// critical!(logger, "Unrecoverable system failure").unwrap();
/// critical!(logger, "Unable to recover from error: {}", "disk full").unwrap();
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}
