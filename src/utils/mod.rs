//! Helpers shared by the web layer and services.
//!
//! - [`slug`] - Short-link slug normalization and validation
//! - [`url_validator`] - Destination and profile URL checks
//! - [`token`] - Session tokens and storage object keys
//! - [`multipart`] - Buffered multipart form reading

pub mod multipart;
pub mod slug;
pub mod token;
pub mod url_validator;
