//! Counted text payload carried by log messages

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::AddAssign;

/// A piece of log text together with its character count.
///
/// The count is maintained by this type itself: every constructor and
/// every mutation updates it, so it always equals
/// `text.chars().count()`. Counting is per character, not per byte, so
/// multi-byte text reports the length a reader would expect.
///
/// # Examples
///
/// ```
/// use template_logger::LogText;
///
/// let mut text = LogText::from("service started");
/// assert_eq!(text.len(), 15);
///
/// text += " on port 8080";
/// assert_eq!(text.as_str(), "service started on port 8080");
/// assert_eq!(text.len(), 28);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogText {
    text: String,
    length: usize,
}

impl LogText {
    /// Create an empty text with length zero
    pub fn new() -> Self {
        Self::default()
    }

    /// The text content
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of characters in the text
    pub fn len(&self) -> usize {
        self.length
    }

    /// True when the text holds no characters
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Append a string slice, updating the character count
    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
        self.length += s.chars().count();
    }

    /// Append a single character, updating the character count
    pub fn push(&mut self, c: char) {
        self.text.push(c);
        self.length += 1;
    }

    /// Consume the text, yielding the inner string
    pub fn into_string(self) -> String {
        self.text
    }
}

impl From<&str> for LogText {
    fn from(s: &str) -> Self {
        LogText {
            text: s.to_string(),
            length: s.chars().count(),
        }
    }
}

impl From<String> for LogText {
    fn from(s: String) -> Self {
        let length = s.chars().count();
        LogText { text: s, length }
    }
}

impl From<char> for LogText {
    fn from(c: char) -> Self {
        LogText {
            text: c.to_string(),
            length: 1,
        }
    }
}

impl AddAssign<&str> for LogText {
    fn add_assign(&mut self, rhs: &str) {
        self.push_str(rhs);
    }
}

impl AddAssign<char> for LogText {
    fn add_assign(&mut self, rhs: char) {
        self.push(rhs);
    }
}

impl AddAssign<&LogText> for LogText {
    fn add_assign(&mut self, rhs: &LogText) {
        self.text.push_str(&rhs.text);
        self.length += rhs.length;
    }
}

impl fmt::Display for LogText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
