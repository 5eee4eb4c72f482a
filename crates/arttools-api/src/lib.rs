// HTTP client for the remote art-tool catalog
pub mod client;
pub mod models;

// Re-export common types
pub use client::{CatalogClient, CatalogError};
pub use models::{ArtToolRecord, FeedbackRecord, LimitedTimeDeal};
