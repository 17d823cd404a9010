//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Log file could not be opened in append mode
    #[error("failed to open log file '{path}': {source}")]
    SinkOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File delivery was requested while the sink is closed or released
    #[error("log file '{path}' is not open")]
    SinkClosed { path: String },

    /// IO failure on an open sink, with context
    #[error("IO error while {operation} '{path}': {source}")]
    SinkIo {
        operation: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Login or device name could not be resolved
    #[error("identity lookup for '{token}' failed: {message}")]
    IdentityLookup { token: String, message: String },

    /// A template without the %message% token was proposed
    #[error("template rejected: '{template}' does not contain %message%")]
    TemplateRejected { template: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoggerError {
    /// Create a sink open error with the offending path
    pub fn sink_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::SinkOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a closed-sink error
    pub fn sink_closed(path: impl Into<String>) -> Self {
        LoggerError::SinkClosed { path: path.into() }
    }

    /// Create a sink IO error with context
    pub fn sink_io(
        operation: impl Into<String>,
        path: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::SinkIo {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create an identity lookup error for a token ("login" or "device")
    pub fn identity_lookup(token: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::IdentityLookup {
            token: token.into(),
            message: message.into(),
        }
    }

    /// Create a template rejection error
    pub fn template_rejected(template: impl Into<String>) -> Self {
        LoggerError::TemplateRejected {
            template: template.into(),
        }
    }
}
