use thiserror::Error;

/// All the ways things can go wrong in the art-tools core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Catalog request failed: {0}")]
    CatalogError(String),

    #[error("Storage operation failed: {0}")]
    StoreError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Art tool not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<arttools_store::StoreError> for Error {
    fn from(e: arttools_store::StoreError) -> Self {
        Error::StoreError(e.to_string())
    }
}
