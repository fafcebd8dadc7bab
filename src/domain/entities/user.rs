//! Dashboard administrator account.

use chrono::{DateTime, Utc};

/// An administrator allowed to sign in to the dashboard.
///
/// Only the bcrypt hash of the password is stored.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
