//! Singleton records: the About section and site-wide SEO settings.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct About {
    pub bio: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Replacement for the About row.
///
/// `image_url: None` keeps the stored photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutUpdate {
    pub bio: String,
    pub image_url: Option<String>,
}

/// Twitter card type advertised in the page head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwitterCard {
    Summary,
    SummaryLargeImage,
}

impl TwitterCard {
    pub fn as_str(&self) -> &'static str {
        match self {
            TwitterCard::Summary => "summary",
            TwitterCard::SummaryLargeImage => "summary_large_image",
        }
    }
}

impl FromStr for TwitterCard {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "summary" => Ok(TwitterCard::Summary),
            "summary_large_image" => Ok(TwitterCard::SummaryLargeImage),
            other => Err(format!("Unknown Twitter card type: {}", other)),
        }
    }
}

impl fmt::Display for TwitterCard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct SeoSettings {
    pub title: String,
    pub description: String,
    pub keywords: Option<String>,
    pub og_image: Option<String>,
    pub twitter_card: Option<TwitterCard>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Replacement for the SEO row.
///
/// `og_image: None` keeps the stored image; the other optional fields are
/// overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoUpdate {
    pub title: String,
    pub description: String,
    pub keywords: Option<String>,
    pub og_image: Option<String>,
    pub twitter_card: Option<TwitterCard>,
}
