//! Environment lookup module
//!
//! Thin wrapper around `std::env` with a fallback value.

use std::env;

/// Get the value of an environment variable, or `fallback` when it is unset
///
/// A variable that is set to an empty string counts as set. A value that is
/// not valid UTF-8 counts as unset.
///
/// # Examples
/// ```
/// use web_helpers::env::getenv;
/// let port = getenv("WEB_HELPERS_DOC_PORT", "5000");
/// assert_eq!(port, "5000");
/// ```
pub fn getenv(key: &str, fallback: &str) -> String {
    env::var(key).unwrap_or_else(|_| fallback.to_string())
}
