//! Validation of user-supplied destination URLs.

use url::Url;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS URLs are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Checks that `input` is an absolute HTTP(S) URL with a host.
///
/// The serialized form of the parsed URL is returned: embedded tabs and
/// newlines are dropped, other control and non-ASCII characters are
/// percent-encoded and the host is punycoded. The result is always a valid
/// `Location` header value.
///
/// # Security
///
/// Rejects `javascript:`, `data:`, `file:` and other non-web schemes, which
/// would turn a redirect into script execution or a local file read.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed URLs.
/// Returns [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
/// Returns [`UrlValidationError::MissingHost`] when no host is present.
pub fn validate_web_url(input: &str) -> Result<String, UrlValidationError> {
    let trimmed = input.trim();
    let url = Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(url.as_str().to_string())
}

/// Checks a social profile URL: web URLs as above, or `mailto:` addresses.
///
/// # Errors
///
/// Same as [`validate_web_url`], except `mailto:` is accepted.
pub fn validate_profile_url(input: &str) -> Result<String, UrlValidationError> {
    let trimmed = input.trim();
    let url = Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    if url.scheme() == "mailto" {
        if url.path().contains('@') {
            return Ok(url.as_str().to_string());
        }
        return Err(UrlValidationError::InvalidFormat(
            "mailto address is missing '@'".to_string(),
        ));
    }

    validate_web_url(trimmed)
}
