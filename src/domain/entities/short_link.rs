//! Short link entity mapping a slug to a destination URL.

use chrono::{DateTime, Utc};

/// A short link with its click counter.
///
/// `slug` is stored lowercased and trimmed; it is unique across all links.
#[derive(Debug, Clone)]
pub struct ShortLink {
    pub id: i64,
    pub slug: String,
    pub original_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShortLink {
    /// Path under which the link is served, e.g. `/abc`.
    pub fn path(&self) -> String {
        format!("/{}", self.slug)
    }
}

/// Input data for creating a new short link.
///
/// Values are expected to be normalized already (see
/// [`crate::utils::slug::normalize_slug`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortLink {
    pub slug: String,
    pub original_url: String,
}
