//! Target URL validation.
//!
//! URLs are stored exactly as submitted, so validation must reject anything that
//! parses but could not be sent back verbatim in a `Location` header.

use url::Url;

/// Errors produced while checking a target URL.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("field url is a required field")]
    Empty,

    #[error("field url is not a valid URL")]
    Malformed,
}

/// Checks that `input` is a well-formed absolute URL with a scheme and a host.
///
/// Control characters are rejected outright: the URL parser silently drops tabs
/// and newlines, but the stored raw text would not be a valid header value.
///
/// # Errors
///
/// Returns [`UrlValidationError::Empty`] for blank input.
/// Returns [`UrlValidationError::Malformed`] if the input contains control
/// characters, parsing fails or the URL has no host.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://example.com/path?q=1").is_ok());
/// assert!(validate_url("not-a-url").is_err());
/// assert!(validate_url("mailto:someone@example.com").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if input.chars().any(char::is_control) {
        return Err(UrlValidationError::Malformed);
    }

    let url = Url::parse(input).map_err(|_| UrlValidationError::Malformed)?;

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::Malformed),
    }
}
