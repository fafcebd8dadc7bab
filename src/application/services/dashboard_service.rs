//! Headline numbers for the dashboard overview.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::repositories::{ProjectRepository, ShortLinkRepository};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub projects_count: i64,
    pub links_count: i64,
    pub total_clicks: i64,
}

pub struct DashboardService<P: ProjectRepository, L: ShortLinkRepository> {
    projects: Arc<P>,
    links: Arc<L>,
}

impl<P: ProjectRepository, L: ShortLinkRepository> DashboardService<P, L> {
    pub fn new(projects: Arc<P>, links: Arc<L>) -> Self {
        Self { projects, links }
    }

    /// Collects project count, link count and total clicks concurrently.
    pub async fn stats(&self) -> Result<DashboardStats, AppError> {
        let (projects_count, links_count, total_clicks) = tokio::try_join!(
            self.projects.count(),
            self.links.count(),
            self.links.total_clicks(),
        )?;

        Ok(DashboardStats {
            projects_count,
            links_count,
            total_clicks,
        })
    }
}
