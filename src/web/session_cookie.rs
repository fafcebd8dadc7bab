//! The dashboard session cookie.

use axum::http::{HeaderMap, HeaderValue, header::COOKIE};
use chrono::{DateTime, Utc};

pub const SESSION_COOKIE_NAME: &str = "portfolio_session";

/// Builds and reads the session cookie.
///
/// The cookie is `HttpOnly`, `SameSite=Lax` and scoped to `/`; `Secure` is
/// added unless disabled for plain-HTTP development.
#[derive(Debug, Clone, Copy)]
pub struct SessionCookie {
    secure: bool,
}

impl SessionCookie {
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    /// `Set-Cookie` value carrying `token` until `expires_at`.
    pub fn issue(&self, token: &str, expires_at: DateTime<Utc>) -> HeaderValue {
        let max_age = (expires_at - Utc::now()).num_seconds().max(0);
        self.build(token, max_age)
    }

    /// `Set-Cookie` value that removes the cookie.
    pub fn clear(&self) -> HeaderValue {
        self.build("", 0)
    }

    fn build(&self, value: &str, max_age: i64) -> HeaderValue {
        let mut cookie = format!(
            "{}={}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
            SESSION_COOKIE_NAME, value, max_age
        );
        if self.secure {
            cookie.push_str("; Secure");
        }

        // Tokens are alphanumeric, so the value is always a valid header
        HeaderValue::from_str(&cookie).unwrap_or_else(|_| HeaderValue::from_static(""))
    }

    /// Extracts the session token from the `Cookie` header, if present.
    ///
    /// Handles multiple cookies in one header and ignores the others.
    pub fn read(headers: &HeaderMap) -> Option<String> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|header| header.to_str().ok())
            .flat_map(|cookies| cookies.split(';'))
            .find_map(|cookie| {
                let (name, value) = cookie.trim().split_once('=')?;
                (name == SESSION_COOKIE_NAME && !value.is_empty()).then(|| value.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_issue_sets_attributes() {
        let cookie = SessionCookie::new(true).issue("abc123", Utc::now() + Duration::hours(1));
        let value = cookie.to_str().unwrap();

        assert!(value.starts_with("portfolio_session=abc123;"));
        assert!(value.contains("HttpOnly"));
        assert!(value.contains("SameSite=Lax"));
        assert!(value.contains("Path=/"));
        assert!(value.ends_with("; Secure"));
    }

    #[test]
    fn test_clear_without_secure() {
        let cookie = SessionCookie::new(false).clear();
        let value = cookie.to_str().unwrap();

        assert!(value.contains("Max-Age=0"));
        assert!(!value.contains("Secure"));
    }

    #[test]
    fn test_read_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; portfolio_session=tok42; lang=en"),
        );

        assert_eq!(SessionCookie::read(&headers).as_deref(), Some("tok42"));
    }

    #[test]
    fn test_read_missing_or_empty() {
        let mut headers = HeaderMap::new();
        assert_eq!(SessionCookie::read(&headers), None);

        headers.insert(COOKIE, HeaderValue::from_static("portfolio_session="));
        assert_eq!(SessionCookie::read(&headers), None);
    }
}
