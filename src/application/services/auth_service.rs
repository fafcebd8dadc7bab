//! Dashboard authentication: admin credentials and server-side sessions.

use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;
use std::sync::{Arc, OnceLock};
use validator::ValidateEmail;

use crate::domain::entities::{AdminUser, NewSession, Session};
use crate::domain::repositories::AuthRepository;
use crate::error::AppError;
use crate::utils::token::generate_session_token;

type HmacSha256 = Hmac<Sha256>;

/// Minimum accepted password length for admin accounts.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Verified against when the email is unknown, so a failed login costs one
/// bcrypt verification whether or not the account exists.
const DUMMY_PASSWORD: &str = "no-such-administrator";

/// A freshly issued session. `token` is the raw value for the cookie.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// A session found for a request cookie.
///
/// `refreshed` carries the new expiry when the session was extended during
/// this lookup, so the caller can re-issue the cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSession {
    pub session: Session,
    pub refreshed: Option<DateTime<Utc>>,
}

/// Service for logging administrators in and out and resolving sessions.
///
/// Session tokens are hashed with HMAC-SHA256 (keyed by `signing_secret`)
/// before storage and comparison. Read access to the database alone is not
/// enough to hijack a session.
pub struct AuthService<R: AuthRepository> {
    repository: Arc<R>,
    signing_secret: String,
    session_ttl: Duration,
    bcrypt_cost: u32,
    dummy_hash: OnceLock<String>,
}

impl<R: AuthRepository> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - user and session storage
    /// - `signing_secret` - HMAC key; rotating it invalidates all sessions
    /// - `session_ttl` - sliding session lifetime
    pub fn new(repository: Arc<R>, signing_secret: String, session_ttl: Duration) -> Self {
        Self {
            repository,
            signing_secret,
            session_ttl,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            dummy_hash: OnceLock::new(),
        }
    }

    /// Overrides the bcrypt work factor (tests use the minimum of 4).
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self.dummy_hash = OnceLock::new();
        self
    }

    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    /// Hashes a raw token with HMAC-SHA256 using the server signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    fn hash_token(&self, token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// A bcrypt hash at this service's cost, created on first use.
    async fn dummy_hash(&self) -> Result<String, AppError> {
        if let Some(hash) = self.dummy_hash.get() {
            return Ok(hash.clone());
        }

        let hash = hash_password(DUMMY_PASSWORD, self.bcrypt_cost).await?;
        Ok(self.dummy_hash.get_or_init(|| hash).clone())
    }

    /// Checks credentials and opens a new session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if email or password is blank.
    /// Returns [`AppError::Unauthorized`] if the email is unknown or the
    /// password does not match (same message for both).
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        user_agent: Option<String>,
    ) -> Result<IssuedSession, AppError> {
        let email = normalize_email(email);
        if email.is_empty() || password.is_empty() {
            return Err(AppError::bad_request(
                "Email and password are required",
                json!({ "fields": ["email", "password"] }),
            ));
        }

        let user = self.repository.find_user_by_email(&email).await?;

        let verified = match &user {
            Some(user) => verify_password(password, &user.password_hash).await?,
            None => {
                verify_password(password, &self.dummy_hash().await?).await?;
                false
            }
        };

        let Some(user) = user.filter(|_| verified) else {
            tracing::warn!(email = %email, "Failed login attempt");
            return Err(AppError::unauthorized(
                "Invalid login credentials",
                json!({ "email": email }),
            ));
        };

        let token = generate_session_token();
        let expires_at = Utc::now() + self.session_ttl;

        self.repository
            .create_session(NewSession {
                token_hash: self.hash_token(&token),
                user_id: user.id,
                user_agent,
                expires_at,
            })
            .await?;

        tracing::info!(user_id = user.id, "Admin logged in");
        Ok(IssuedSession { token, expires_at })
    }

    /// Looks up the session behind a cookie token.
    ///
    /// Sessions slide: once less than half of the lifetime remains, the
    /// expiry is pushed out to a full lifetime from now.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(_))` for a live session
    /// - `Ok(None)` for unknown or expired tokens
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, token: &str) -> Result<Option<ResolvedSession>, AppError> {
        if token.is_empty() {
            return Ok(None);
        }

        let token_hash = self.hash_token(token);
        let Some(mut session) = self.repository.find_session(&token_hash).await? else {
            return Ok(None);
        };

        let now = Utc::now();
        let mut refreshed = None;

        if session.expires_at - now < self.session_ttl / 2 {
            let expires_at = now + self.session_ttl;
            self.repository
                .extend_session(&token_hash, expires_at)
                .await?;
            session.expires_at = expires_at;
            refreshed = Some(expires_at);
        }

        Ok(Some(ResolvedSession { session, refreshed }))
    }

    /// Ends the session behind a cookie token. Unknown tokens are ignored.
    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        if self.repository.delete_session(&self.hash_token(token)).await? {
            tracing::info!("Admin logged out");
        }
        Ok(())
    }

    /// Creates an administrator.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed email or a password
    /// shorter than [`MIN_PASSWORD_LENGTH`].
    /// Returns [`AppError::Conflict`] if the email is taken.
    pub async fn create_user(&self, email: &str, password: &str) -> Result<AdminUser, AppError> {
        let email = normalize_email(email);
        validate_credentials(&email, password)?;

        let hash = hash_password(password, self.bcrypt_cost).await?;

        self.repository
            .create_user(&email, &hash)
            .await
            .map_err(|e| match e {
                AppError::Conflict { .. } => AppError::conflict(
                    "An administrator with this email already exists",
                    json!({ "email": email }),
                ),
                other => other,
            })
    }

    /// Creates the administrator unless one with this email exists.
    /// Returns whether a user was created.
    pub async fn ensure_user(&self, email: &str, password: &str) -> Result<bool, AppError> {
        if self
            .repository
            .find_user_by_email(&normalize_email(email))
            .await?
            .is_some()
        {
            return Ok(false);
        }

        self.create_user(email, password).await?;
        Ok(true)
    }

    /// Replaces a password and signs the user out of every session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no administrator has this email.
    pub async fn set_password(&self, email: &str, password: &str) -> Result<(), AppError> {
        let email = normalize_email(email);
        validate_credentials(&email, password)?;

        let hash = hash_password(password, self.bcrypt_cost).await?;

        if !self.repository.update_password(&email, &hash).await? {
            return Err(AppError::not_found(
                "Administrator not found",
                json!({ "email": email }),
            ));
        }
        Ok(())
    }

    pub async fn list_users(&self) -> Result<Vec<AdminUser>, AppError> {
        self.repository.list_users().await
    }

    /// Deletes an administrator together with their sessions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no administrator has this email.
    pub async fn delete_user(&self, email: &str) -> Result<(), AppError> {
        let email = normalize_email(email);
        if !self.repository.delete_user(&email).await? {
            return Err(AppError::not_found(
                "Administrator not found",
                json!({ "email": email }),
            ));
        }
        Ok(())
    }

    /// Removes expired sessions, returning how many were deleted.
    pub async fn purge_expired_sessions(&self) -> Result<u64, AppError> {
        self.repository.delete_expired_sessions().await
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_credentials(email: &str, password: &str) -> Result<(), AppError> {
    if !email.validate_email() {
        return Err(AppError::bad_request(
            "Invalid email address",
            json!({ "email": email }),
        ));
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::bad_request(
            format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            ),
            json!({}),
        ));
    }

    Ok(())
}

/// bcrypt is CPU-bound; keep it off the async workers.
async fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    let password = password.to_string();

    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| {
            AppError::internal(
                "Password hashing task failed",
                json!({ "reason": e.to_string() }),
            )
        })?
        .map_err(|e| {
            AppError::internal(
                "Failed to hash password",
                json!({ "reason": e.to_string() }),
            )
        })
}

async fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let password = password.to_string();
    let hash = hash.to_string();

    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash).unwrap_or(false))
        .await
        .map_err(|e| {
            AppError::internal(
                "Password verification task failed",
                json!({ "reason": e.to_string() }),
            )
        })
}
