//! Slug normalization and validation for short links.

use crate::error::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Maximum slug length in characters.
pub const MAX_SLUG_LENGTH: usize = 64;

static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9_-]*$").expect("slug pattern is valid"));

/// Slugs that would shadow application routes.
const RESERVED_SLUGS: &[&str] = &["dashboard", "login", "logout", "health", "static", "uploads"];

/// Lowercases and trims a slug as entered in the dashboard form.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_slug("  My-Link "), "my-link");
/// ```
pub fn normalize_slug(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Validates an already normalized slug.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: lowercase letters, digits, hyphens, underscores
/// - Must start with a letter or digit
/// - Cannot be a reserved route name
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_slug(slug: &str) -> Result<(), AppError> {
    if slug.is_empty() || slug.chars().count() > MAX_SLUG_LENGTH {
        return Err(AppError::bad_request(
            format!("Slug must be 1-{} characters", MAX_SLUG_LENGTH),
            json!({ "provided_length": slug.chars().count() }),
        ));
    }

    if !SLUG_REGEX.is_match(slug) {
        return Err(AppError::bad_request(
            "Slug can only contain lowercase letters, digits, hyphens and underscores",
            json!({ "slug": slug }),
        ));
    }

    if RESERVED_SLUGS.contains(&slug) {
        return Err(AppError::bad_request(
            "This slug is reserved",
            json!({ "slug": slug }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_slug("  ABC "), "abc");
        assert_eq!(normalize_slug("My-Link"), "my-link");
    }

    #[test]
    fn test_validate_accepts_simple_slugs() {
        assert!(validate_slug("abc").is_ok());
        assert!(validate_slug("promo-2024").is_ok());
        assert!(validate_slug("a_b").is_ok());
        assert!(validate_slug("7").is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_characters() {
        assert!(validate_slug("has space").is_err());
        assert!(validate_slug("slash/inside").is_err());
        assert!(validate_slug("-leading").is_err());
        assert!(validate_slug("Upper").is_err());
    }

    #[test]
    fn test_validate_rejects_reserved() {
        let err = validate_slug("dashboard").unwrap_err();
        assert!(err.to_string().contains("reserved"));
        assert!(validate_slug("login").is_err());
    }

    #[test]
    fn test_validate_length() {
        assert!(validate_slug("").is_err());
        assert!(validate_slug(&"a".repeat(MAX_SLUG_LENGTH)).is_ok());
        assert!(validate_slug(&"a".repeat(MAX_SLUG_LENGTH + 1)).is_err());
    }
}
