//! Authenticated dashboard session.

use chrono::{DateTime, Utc};

/// Session resolved for the current request.
///
/// Produced once by the session gate and passed to handlers through request
/// extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: i64,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

/// Input data for persisting a new session.
///
/// The raw token never reaches storage; only its keyed hash does.
#[derive(Debug, Clone)]
pub struct NewSession {
    pub token_hash: String,
    pub user_id: i64,
    pub user_agent: Option<String>,
    pub expires_at: DateTime<Utc>,
}
