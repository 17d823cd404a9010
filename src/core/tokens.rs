//! Literal token search and replacement
//!
//! The primitive behind template rendering: plain substring search with
//! no escaping or pattern language. Tokens are matched exactly as given.

/// Replace every non-overlapping occurrence of `token` in `input`.
///
/// Occurrences are found left to right and the scan cursor advances past
/// each inserted replacement, so a replacement that itself contains the
/// token is never re-matched and the call always terminates. An empty
/// token matches nothing and returns the input unchanged.
///
/// # Examples
///
/// ```
/// use template_logger::tokens;
///
/// let line = tokens::replace("[%level%]: %message%", "%level%", "INFO");
/// assert_eq!(line, "[INFO]: %message%");
///
/// // A replacement containing the token is left alone
/// let out = tokens::replace("x", "x", "xx");
/// assert_eq!(out, "xx");
/// ```
#[must_use]
pub fn replace(input: &str, token: &str, replacement: &str) -> String {
    if token.is_empty() {
        return input.to_string();
    }

    let mut output = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find(token) {
        output.push_str(&rest[..pos]);
        output.push_str(replacement);
        rest = &rest[pos + token.len()..];
    }
    output.push_str(rest);
    output
}

/// True when `token` occurs in `input`. Empty tokens never exist,
/// matching the empty-token no-op in [`replace`].
///
/// # Examples
///
/// ```
/// use template_logger::tokens;
///
/// assert!(tokens::exist("[%asctime%] [%level%]", "%level%"));
/// assert!(!tokens::exist("[%asctime%]", "%message%"));
/// assert!(!tokens::exist("anything", ""));
/// ```
#[must_use]
pub fn exist(input: &str, token: &str) -> bool {
    !token.is_empty() && input.contains(token)
}
