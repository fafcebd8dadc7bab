//! Object storage for uploaded images.

pub mod local_storage;
pub mod service;

pub use local_storage::LocalStorage;
pub use service::{ObjectStorage, StorageError, StorageResult};

#[cfg(test)]
pub use service::MockObjectStorage;
