//! Work experience entity.

use chrono::{DateTime, NaiveDate, Utc};

/// A position held, with an optional end date (`None` means current).
#[derive(Debug, Clone)]
pub struct Experience {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Experience {
    pub fn is_current(&self) -> bool {
        self.end_date.is_none()
    }

    /// Human-readable period, e.g. `Jan 2021 - Present`.
    pub fn period(&self) -> String {
        let start = self.start_date.format("%b %Y");
        match self.end_date {
            Some(end) => format!("{} - {}", start, end.format("%b %Y")),
            None => format!("{} - Present", start),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExperience {
    pub title: String,
    pub company: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: String,
}
