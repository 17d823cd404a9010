//! Template-driven message formatting
//!
//! A format template is literal text mixed with recognized tokens. The
//! renderer walks the template once, left to right, substituting each
//! token with its value. Substituted values are never rescanned, so a
//! message containing token-like text passes through untouched.

use super::error::{LoggerError, Result};
use super::identity::IdentityResolver;
use super::log_message::LogMessage;
use super::tokens;

/// Token replaced by the message timestamp (`YYYY-MM-DD HH:MM:SS`)
pub const TOKEN_ASCTIME: &str = "%asctime%";
/// Token replaced by the level name (`DEBUG`, `INFO`, ...)
pub const TOKEN_LEVEL: &str = "%level%";
/// Token replaced by the message text; every template must contain it
pub const TOKEN_MESSAGE: &str = "%message%";
/// Token replaced by the login name of the current user
pub const TOKEN_LOGIN: &str = "%login%";
/// Token replaced by the device (host) name
pub const TOKEN_DEVICE: &str = "%device%";

/// Template used by a freshly constructed formatter
pub const DEFAULT_TEMPLATE: &str = "[%asctime%] [%level%]: %message%";

/// Substitute the recognized tokens in `template` in a single pass.
///
/// At each `%` the renderer tries the token table; a match appends the
/// resolved value and skips past the token, anything else is copied
/// through literally. The identity resolver is consulted only when
/// `%login%` or `%device%` is actually present, at most once per token,
/// and a failed lookup renders as an empty string.
///
/// # Examples
///
/// ```
/// use template_logger::{render_template, StaticIdentity};
///
/// let identity = StaticIdentity::new("alice", "web-1");
/// let line = render_template(
///     "[%asctime%] [%level%]: %message%",
///     "2024-01-15 09:30:00",
///     "INFO",
///     "server started",
///     &identity,
/// );
/// assert_eq!(line, "[2024-01-15 09:30:00] [INFO]: server started");
/// ```
#[must_use]
pub fn render_template(
    template: &str,
    asctime: &str,
    level: &str,
    message: &str,
    identity: &dyn IdentityResolver,
) -> String {
    let mut output = String::with_capacity(template.len() + message.len());
    let mut login: Option<String> = None;
    let mut device: Option<String> = None;
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        output.push_str(&rest[..pos]);
        rest = &rest[pos..];

        if let Some(after) = rest.strip_prefix(TOKEN_ASCTIME) {
            output.push_str(asctime);
            rest = after;
        } else if let Some(after) = rest.strip_prefix(TOKEN_LEVEL) {
            output.push_str(level);
            rest = after;
        } else if let Some(after) = rest.strip_prefix(TOKEN_MESSAGE) {
            output.push_str(message);
            rest = after;
        } else if let Some(after) = rest.strip_prefix(TOKEN_LOGIN) {
            let value = login.get_or_insert_with(|| identity.login().unwrap_or_default());
            output.push_str(value);
            rest = after;
        } else if let Some(after) = rest.strip_prefix(TOKEN_DEVICE) {
            let value = device.get_or_insert_with(|| identity.device().unwrap_or_default());
            output.push_str(value);
            rest = after;
        } else {
            // Not a recognized token, keep the '%' literal
            output.push('%');
            rest = &rest[1..];
        }
    }
    output.push_str(rest);
    output
}

/// Owns the active format template and renders messages through it.
///
/// A template is accepted only if it contains `%message%`. Rejected
/// templates leave the active one unchanged.
///
/// # Examples
///
/// ```
/// use template_logger::{LogLevel, LogMessage, MessageFormatter, StaticIdentity};
///
/// let formatter = MessageFormatter::new();
/// let message = LogMessage::new(LogLevel::Info, "server started");
/// let identity = StaticIdentity::new("alice", "web-1");
///
/// let line = formatter.render(&message, &identity);
/// assert!(line.ends_with("[INFO]: server started"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageFormatter {
    template: String,
}

impl MessageFormatter {
    /// Create a formatter with the default template
    #[must_use]
    pub fn new() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }

    /// Create a formatter with a custom template.
    ///
    /// Returns [`LoggerError::TemplateRejected`] when the template does
    /// not contain `%message%`.
    pub fn with_template(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        Self::validate(&template)?;
        Ok(Self { template })
    }

    /// Swap in a new template, keeping the current one on rejection
    pub fn set_template(&mut self, template: impl Into<String>) -> Result<()> {
        let template = template.into();
        Self::validate(&template)?;
        self.template = template;
        Ok(())
    }

    /// The active template
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Render a message through the active template
    #[must_use]
    pub fn render(&self, message: &LogMessage, identity: &dyn IdentityResolver) -> String {
        render_template(
            &self.template,
            &message.timestamp.asctime(),
            message.level.to_str(),
            message.text.as_str(),
            identity,
        )
    }

    fn validate(template: &str) -> Result<()> {
        if tokens::exist(template, TOKEN_MESSAGE) {
            Ok(())
        } else {
            Err(LoggerError::template_rejected(template))
        }
    }
}

impl Default for MessageFormatter {
    fn default() -> Self {
        Self::new()
    }
}
