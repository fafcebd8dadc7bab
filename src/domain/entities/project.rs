//! Project entity shown on the portfolio home page.

use chrono::{DateTime, Utc};

/// A portfolio project with its cover image.
#[derive(Debug, Clone)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub demo_link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub demo_link: Option<String>,
}

/// Update for an existing project.
///
/// `image_url: None` keeps the current image. `demo_link: None` clears the link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPatch {
    pub title: String,
    pub description: String,
    pub demo_link: Option<String>,
    pub image_url: Option<String>,
}
