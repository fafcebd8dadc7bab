//! Web-specific middleware.

pub mod session_gate;

pub use session_gate::{AdminSession, CurrentSession};
