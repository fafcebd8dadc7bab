//! Random identifiers: session tokens and storage object keys.

use crate::error::AppError;
use base64::Engine as _;
use rand::Rng;
use serde_json::json;

/// Length of random bytes behind an object key before base64 encoding.
const OBJECT_KEY_BYTES: usize = 12;

const TOKEN_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const TOKEN_LEN: usize = 48;

/// Generates a session token.
///
/// # Format
///
/// - Length: 48 characters
/// - Character set: A-Z, a-z, 0-9
/// - Entropy: ~286 bits
pub fn generate_session_token() -> String {
    let mut rng = rand::rng();

    (0..TOKEN_LEN)
        .map(|_| {
            let idx = rng.random_range(0..TOKEN_CHARSET.len());
            TOKEN_CHARSET[idx] as char
        })
        .collect()
}

/// Generates a random object key with the given extension, e.g. `Xq3...Vb.png`.
///
/// Uses `getrandom` for entropy and URL-safe base64 without padding, giving a
/// 16-character stem.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
pub fn generate_object_key(extension: &str) -> Result<String, AppError> {
    let mut buffer = [0u8; OBJECT_KEY_BYTES];

    getrandom::fill(&mut buffer).map_err(|e| {
        AppError::internal(
            "Failed to generate random bytes",
            json!({ "reason": e.to_string() }),
        )
    })?;

    let stem = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer);
    Ok(format!("{}.{}", stem, extension))
}
