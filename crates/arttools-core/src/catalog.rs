use crate::{models::ArtTool, Result};

/// Trait for catalog sources - keeps the remote API swappable and lets
/// tests feed the screens from a fixture instead of the network.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// List the full item collection.
    async fn list_art_tools(&self) -> Result<Vec<ArtTool>>;

    /// Fetch one item by id.
    async fn get_art_tool(&self, id: &str) -> Result<ArtTool>;
}
