//! Form DTOs for the web layer.

pub mod forms;
