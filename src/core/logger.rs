//! Main logger implementation

use super::{
    error::{LoggerError, Result},
    formatter::MessageFormatter,
    identity::{IdentityResolver, OsIdentity},
    log_level::LogLevel,
    log_message::LogMessage,
    log_text::LogText,
};
use crate::sinks::{ConsoleSink, FileSink};
use parking_lot::{Mutex, RwLock};
use std::path::{Path, PathBuf};

/// Which destinations a log call delivers to.
///
/// The file is the constructed destination; the console is an opt-in
/// mirror. `Sinks::default()` is file-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sinks {
    pub console: bool,
    pub file: bool,
}

impl Sinks {
    /// File only, the default
    pub const FILE: Sinks = Sinks {
        console: false,
        file: true,
    };

    /// Console only
    pub const CONSOLE: Sinks = Sinks {
        console: true,
        file: false,
    };

    /// Console and file
    pub const BOTH: Sinks = Sinks {
        console: true,
        file: true,
    };
}

impl Default for Sinks {
    fn default() -> Self {
        Self::FILE
    }
}

/// Formats messages through the active template and writes the resulting
/// line to a log file and/or the console.
///
/// The file sink is opened in append mode at construction. An open
/// failure is reported on stderr and leaves the logger usable with the
/// file sink closed: console delivery keeps working, file delivery
/// returns [`LoggerError::SinkClosed`]. There is no reopen.
///
/// All methods take `&self`; the sink and the template are internally
/// locked, so a `Logger` can be shared across threads and lines are
/// written whole.
///
/// # Examples
///
/// ```no_run
/// use template_logger::{Logger, LogLevel, Sinks};
///
/// let logger = Logger::new("/var/log/app.log");
/// logger.log(LogLevel::Info, "server started", Sinks::BOTH).unwrap();
/// ```
pub struct Logger {
    path: PathBuf,
    sink: Mutex<Option<FileSink>>,
    console: ConsoleSink,
    formatter: RwLock<MessageFormatter>,
    identity: Box<dyn IdentityResolver>,
}

impl Logger {
    /// Create a logger writing to `path`.
    ///
    /// The file is opened for append, created if missing. When the open
    /// fails the failure is reported on stderr and the logger starts
    /// with the file sink closed instead of failing construction.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let sink = match FileSink::open(&path) {
            Ok(sink) => Some(sink),
            Err(e) => {
                eprintln!("[LOGGER ERROR] {}", e);
                None
            }
        };

        Self {
            path,
            sink: Mutex::new(sink),
            console: ConsoleSink::new(),
            formatter: RwLock::new(MessageFormatter::new()),
            identity: Box::new(OsIdentity::new()),
        }
    }

    /// Replace the default template, rejecting templates without `%message%`
    pub fn with_template(self, template: impl Into<String>) -> Result<Self> {
        self.set_template(template)?;
        Ok(self)
    }

    /// Enable or disable colored console output
    #[must_use]
    pub fn with_console_colors(mut self, use_colors: bool) -> Self {
        self.console = ConsoleSink::with_colors(use_colors);
        self
    }

    /// Replace the OS-backed identity resolver
    #[must_use]
    pub fn with_identity_resolver<R: IdentityResolver + 'static>(mut self, resolver: R) -> Self {
        self.identity = Box::new(resolver);
        self
    }

    /// Swap in a new template.
    ///
    /// Returns [`LoggerError::TemplateRejected`] and keeps the previous
    /// template when the new one does not contain `%message%`.
    pub fn set_template(&self, template: impl Into<String>) -> Result<()> {
        self.formatter.write().set_template(template)
    }

    /// The active template
    #[must_use]
    pub fn template(&self) -> String {
        self.formatter.read().template().to_string()
    }

    /// Path the logger was constructed with
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True while the file sink holds an open handle
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.sink.lock().is_some()
    }

    /// Format and deliver a message built from `level` and `text`,
    /// capturing the current time.
    pub fn log(&self, level: LogLevel, text: impl Into<LogText>, sinks: Sinks) -> Result<()> {
        self.log_message(LogMessage::new(level, text), sinks)
    }

    /// Format and deliver a pre-built message.
    ///
    /// The message is rendered once and the same line goes to every
    /// selected sink. Console delivery does not depend on the file
    /// sink's state: with both sinks selected and the file closed, the
    /// line is still printed and the file error is returned.
    pub fn log_message(&self, message: LogMessage, sinks: Sinks) -> Result<()> {
        let line = self.formatter.read().render(&message, self.identity.as_ref());

        if sinks.console {
            self.console.print(message.level, &line);
        }

        if sinks.file {
            let mut guard = self.sink.lock();
            match guard.as_mut() {
                Some(sink) => sink.write_line(&line)?,
                None => {
                    return Err(LoggerError::sink_closed(self.path.display().to_string()));
                }
            }
        }

        Ok(())
    }

    #[inline]
    pub fn debug(&self, text: impl Into<LogText>) -> Result<()> {
        self.log(LogLevel::Debug, text, Sinks::default())
    }

    #[inline]
    pub fn info(&self, text: impl Into<LogText>) -> Result<()> {
        self.log(LogLevel::Info, text, Sinks::default())
    }

    #[inline]
    pub fn warn(&self, text: impl Into<LogText>) -> Result<()> {
        self.log(LogLevel::Warn, text, Sinks::default())
    }

    #[inline]
    pub fn error(&self, text: impl Into<LogText>) -> Result<()> {
        self.log(LogLevel::Error, text, Sinks::default())
    }

    #[inline]
    pub fn critical(&self, text: impl Into<LogText>) -> Result<()> {
        self.log(LogLevel::Critical, text, Sinks::default())
    }

    /// Push buffered file lines to disk and flush the console streams
    pub fn flush(&self) -> Result<()> {
        if let Some(sink) = self.sink.lock().as_mut() {
            sink.flush()?;
        }
        self.console.flush()
    }

    /// Close the file sink, flushing buffered lines.
    ///
    /// Idempotent; later file deliveries return
    /// [`LoggerError::SinkClosed`]. The console keeps working.
    pub fn close(&self) {
        // Dropping the sink flushes and releases the file
        let sink = self.sink.lock().take();
        drop(sink);
    }
}
