//! Identity lookup for the `%login%` and `%device%` tokens

use super::error::{LoggerError, Result};
use once_cell::sync::OnceCell;

/// Source of the login and device names substituted into templates.
///
/// Both lookups are fallible. The formatter invokes them only when the
/// corresponding token actually appears in the template, and renders an
/// empty string when a lookup fails, so implementations never have to
/// guess a placeholder value.
pub trait IdentityResolver: Send + Sync {
    /// Name of the user the process runs as
    fn login(&self) -> Result<String>;

    /// Name of the machine the process runs on
    fn device(&self) -> Result<String>;
}

// Lookup results are process-wide constants for the lifetime of the
// program, so they are resolved once and shared by every OsIdentity.
static LOGIN: OnceCell<std::result::Result<String, String>> = OnceCell::new();
static DEVICE: OnceCell<std::result::Result<String, String>> = OnceCell::new();

/// Resolver backed by the operating system.
///
/// Each lookup is performed at most once per process and the outcome is
/// cached, including failures.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsIdentity;

impl OsIdentity {
    pub fn new() -> Self {
        Self
    }
}

impl IdentityResolver for OsIdentity {
    fn login(&self) -> Result<String> {
        LOGIN
            .get_or_init(|| whoami::fallible::username().map_err(|e| e.to_string()))
            .clone()
            .map_err(|message| LoggerError::identity_lookup("login", message))
    }

    fn device(&self) -> Result<String> {
        DEVICE
            .get_or_init(|| whoami::fallible::devicename().map_err(|e| e.to_string()))
            .clone()
            .map_err(|message| LoggerError::identity_lookup("device", message))
    }
}

/// Resolver with fixed answers, for deterministic output in tests and demos.
///
/// # Examples
///
/// ```
/// use template_logger::{IdentityResolver, StaticIdentity};
///
/// let identity = StaticIdentity::new("alice", "build-host");
/// assert_eq!(identity.login().unwrap(), "alice");
/// assert_eq!(identity.device().unwrap(), "build-host");
/// ```
#[derive(Debug, Clone)]
pub struct StaticIdentity {
    login: String,
    device: String,
}

impl StaticIdentity {
    pub fn new(login: impl Into<String>, device: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            device: device.into(),
        }
    }
}

impl IdentityResolver for StaticIdentity {
    fn login(&self) -> Result<String> {
        Ok(self.login.clone())
    }

    fn device(&self) -> Result<String> {
        Ok(self.device.clone())
    }
}

impl<T: IdentityResolver + ?Sized> IdentityResolver for std::sync::Arc<T> {
    fn login(&self) -> Result<String> {
        (**self).login()
    }

    fn device(&self) -> Result<String> {
        (**self).device()
    }
}
