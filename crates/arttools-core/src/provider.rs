use std::sync::Arc;

use arttools_store::StorageBackend;
use tokio::sync::watch;

use crate::favorites::{FavoritesService, FavoritesStore};

/// Process-wide distribution point for the favorites service.
///
/// Exactly one [`FavoritesService`] is constructed per provider, and the
/// provider is meant to live for the whole application run. Consumers
/// get cheap [`handle`](Self::handle) clones of the same service, so a
/// mutation made through any handle is visible to every other one; the
/// [`subscribe`](Self::subscribe) channel tells them when to re-read.
///
/// Tests build their own provider over a `MemoryBackend` for isolation.
pub struct FavoritesProvider {
    service: Arc<FavoritesService>,
}

impl FavoritesProvider {
    /// Construct the shared service and perform the initial load from
    /// storage.
    pub async fn initialize(backend: Arc<dyn StorageBackend>) -> Self {
        let service = Arc::new(FavoritesService::new(FavoritesStore::new(backend)));
        service.refresh_favorites().await;
        Self { service }
    }

    pub fn handle(&self) -> Arc<FavoritesService> {
        Arc::clone(&self.service)
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.service.subscribe()
    }
}
