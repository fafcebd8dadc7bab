//! Web layer: the public portfolio and the admin dashboard.
//!
//! Pages are rendered server-side with Askama templates; dashboard forms are
//! submitted by `static/dashboard.js` and answered with JSON.
//!
//! # Modules
//!
//! - [`handlers`] - Page and form action handlers
//! - [`middleware`] - Session gate and session extractors
//! - [`dto`] - Form bodies
//! - [`extract`] - Action extractors with JSON rejections
//! - [`session_cookie`] - Session cookie encoding
//! - [`routes`] - Route configuration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod session_cookie;
