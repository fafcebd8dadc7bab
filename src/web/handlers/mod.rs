//! HTML pages and form actions for the portfolio and dashboard.

mod actions;
mod dashboard;
mod home;
mod login;

pub use actions::*;
pub use dashboard::{content_handler, dashboard_handler, profile_handler};
pub use home::{group_skills, home_handler};
pub use login::{login_handler, login_page_handler, logout_handler};
