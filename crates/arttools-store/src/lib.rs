// Durable key-value storage backends for the favorites store
pub mod backend;

pub use backend::{FileBackend, MemoryBackend, StorageBackend, StoreError};

/// Result type alias because typing Result<T, StoreError> everywhere is tedious
pub type Result<T> = std::result::Result<T, StoreError>;
