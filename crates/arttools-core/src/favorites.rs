use std::sync::{Arc, PoisonError, RwLock};

use arttools_store::StorageBackend;
use tokio::sync::{watch, Mutex};
use tracing::{debug, error, warn};

use crate::models::ArtTool;
use crate::Result;

/// Storage key under which the favorite set is persisted.
pub const FAVORITES_KEY: &str = "@art_tools_favorites";

/// Typed persistence wrapper for the favorite set: one fixed key holding
/// a JSON array of [`ArtTool`] records.
pub struct FavoritesStore {
    backend: Arc<dyn StorageBackend>,
    key: String,
}

impl FavoritesStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self::with_key(backend, FAVORITES_KEY)
    }

    pub fn with_key(backend: Arc<dyn StorageBackend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Read the stored favorite set.
    ///
    /// Never fails: an absent key is an empty set, and read or parse
    /// failures are logged and degrade to an empty set as well. No
    /// repair write happens here; the malformed value stays on disk
    /// until the next successful [`write`](Self::write).
    pub async fn load(&self) -> Vec<ArtTool> {
        self.try_load().await.unwrap_or_else(|e| {
            warn!("Failed to read favorites, treating as empty: {}", e);
            Vec::new()
        })
    }

    /// Like [`load`](Self::load), but reports backend read failures to
    /// the caller instead of degrading. An absent key is still an empty
    /// set, and a malformed value still degrades (it is data loss either
    /// way; callers can't do better than empty).
    pub async fn try_load(&self) -> Result<Vec<ArtTool>> {
        let raw = match self.backend.get(&self.key).await? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        match serde_json::from_str(&raw) {
            Ok(tools) => Ok(tools),
            Err(e) => {
                warn!("Malformed favorites payload, treating as empty: {}", e);
                Ok(Vec::new())
            }
        }
    }

    /// Replace the stored favorite set with the given collection.
    pub async fn write(&self, tools: &[ArtTool]) -> Result<()> {
        let payload = serde_json::to_string(tools)?;
        self.backend.set(&self.key, &payload).await?;
        Ok(())
    }

    /// Delete the storage key entirely. Distinct from writing an empty
    /// collection: a later [`is_initialized`](Self::is_initialized)
    /// reports false.
    pub async fn remove(&self) -> Result<()> {
        self.backend.remove(&self.key).await?;
        Ok(())
    }

    /// Whether the storage key currently exists. Diagnostics only.
    pub async fn is_initialized(&self) -> Result<bool> {
        Ok(self.backend.contains(&self.key).await?)
    }
}

#[derive(Default)]
struct ServiceState {
    favorites: Vec<ArtTool>,
    loading: bool,
    last_error: Option<String>,
}

/// In-memory cache and mutation API over the [`FavoritesStore`].
///
/// One instance owns the authoritative in-memory favorite set. Every
/// mutation runs a reload-mutate-write sequence against the store so
/// changes made by other store writers are not clobbered, and a single
/// async mutex serializes those sequences within the process: at most
/// one writer at a time. Queries (`is_favorite`, `favorites`) are
/// synchronous and touch only the in-memory set.
///
/// Storage failures never corrupt the cache: a failed read or write
/// leaves the in-memory set at its current value (stale but consistent)
/// and is surfaced through [`last_error`](Self::last_error) and, for
/// mutations, the returned `Err`.
pub struct FavoritesService {
    store: FavoritesStore,
    state: RwLock<ServiceState>,
    // Serializes every reload-mutate-write sequence
    write_guard: Mutex<()>,
    revision: watch::Sender<u64>,
}

impl FavoritesService {
    pub fn new(store: FavoritesStore) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            store,
            state: RwLock::new(ServiceState::default()),
            write_guard: Mutex::new(()),
            revision,
        }
    }

    pub fn store(&self) -> &FavoritesStore {
        &self.store
    }

    /// Membership test against the in-memory set only. Reflects the most
    /// recently completed mutation or refresh, not in-flight ones.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.read_state(|s| s.favorites.iter().any(|t| t.id == id))
    }

    /// Cloned snapshot of the favorite set. Mutating the returned vec
    /// never reaches the service.
    pub fn favorites(&self) -> Vec<ArtTool> {
        self.read_state(|s| s.favorites.clone())
    }

    /// True while a reload from storage is in flight.
    pub fn is_loading(&self) -> bool {
        self.read_state(|s| s.loading)
    }

    /// Message of the most recent storage failure, cleared by the next
    /// successful operation.
    pub fn last_error(&self) -> Option<String> {
        self.read_state(|s| s.last_error.clone())
    }

    /// Receiver of a revision counter bumped after every state change.
    /// Consumers re-read after a change instead of polling.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Add an item to the favorite set.
    ///
    /// Returns `Ok(true)` when the item was added, `Ok(false)` for the
    /// idempotent no-op when it already was a favorite, and `Err` when
    /// the reload or write-back failed (the set is then unchanged).
    pub async fn add_favorite(&self, tool: ArtTool) -> Result<bool> {
        let _guard = self.write_guard.lock().await;
        let mut current = self.reload().await?;

        if current.iter().any(|t| t.id == tool.id) {
            debug!(id = %tool.id, "already a favorite");
            return Ok(false);
        }

        current.push(tool);
        self.commit(current).await?;
        Ok(true)
    }

    /// Remove an item from the favorite set by id.
    ///
    /// Removing a non-member is a successful no-op; the result tells
    /// whether an entry was actually removed.
    pub async fn remove_favorite(&self, id: &str) -> Result<bool> {
        let _guard = self.write_guard.lock().await;
        let current = self.reload().await?;

        let remaining: Vec<ArtTool> = current.iter().filter(|t| t.id != id).cloned().collect();
        let removed = remaining.len() != current.len();

        self.commit(remaining).await?;
        Ok(removed)
    }

    /// Empty the favorite set. The storage key stays present, holding an
    /// empty collection.
    pub async fn clear_all_favorites(&self) -> Result<()> {
        let _guard = self.write_guard.lock().await;
        self.commit(Vec::new()).await
    }

    /// Delete the favorites storage key entirely and empty the in-memory
    /// set. Unlike [`clear_all_favorites`](Self::clear_all_favorites),
    /// storage afterwards looks never-initialized.
    pub async fn reset_favorites(&self) -> Result<()> {
        let _guard = self.write_guard.lock().await;

        match self.store.remove().await {
            Ok(()) => {
                self.write_state(|s| {
                    s.favorites.clear();
                    s.last_error = None;
                });
                Ok(())
            }
            Err(e) => {
                error!("Failed to reset favorites: {}", e);
                self.write_state(|s| s.last_error = Some(e.to_string()));
                Err(e)
            }
        }
    }

    /// Unconditionally reload the favorite set from storage, for when
    /// the UI regains visibility and an external writer may have run.
    /// A read failure keeps the current in-memory set and is reported
    /// through [`last_error`](Self::last_error).
    pub async fn refresh_favorites(&self) {
        let _guard = self.write_guard.lock().await;
        // Already logged and surfaced via the error field
        let _ = self.reload().await;
    }

    /// Reload from storage into memory and return the fresh collection.
    /// On a read failure the in-memory set is left untouched.
    async fn reload(&self) -> Result<Vec<ArtTool>> {
        self.set_loading(true);
        match self.store.try_load().await {
            Ok(tools) => {
                self.write_state(|s| {
                    s.favorites = tools.clone();
                    s.loading = false;
                    s.last_error = None;
                });
                Ok(tools)
            }
            Err(e) => {
                error!("Failed to reload favorites: {}", e);
                self.write_state(|s| {
                    s.loading = false;
                    s.last_error = Some(e.to_string());
                });
                Err(e)
            }
        }
    }

    /// Persist the given collection and make it the in-memory set. On
    /// failure the in-memory set keeps its current value.
    async fn commit(&self, tools: Vec<ArtTool>) -> Result<()> {
        match self.store.write(&tools).await {
            Ok(()) => {
                self.write_state(|s| {
                    s.favorites = tools;
                    s.last_error = None;
                });
                Ok(())
            }
            Err(e) => {
                error!("Failed to persist favorites: {}", e);
                self.write_state(|s| s.last_error = Some(e.to_string()));
                Err(e)
            }
        }
    }

    fn read_state<T>(&self, f: impl FnOnce(&ServiceState) -> T) -> T {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    // The loading flag is polled, not broadcast; flipping it alone
    // should not wake subscribers.
    fn set_loading(&self, loading: bool) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.loading = loading;
    }

    fn write_state(&self, f: impl FnOnce(&mut ServiceState)) {
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            f(&mut state);
        }
        self.revision.send_modify(|rev| *rev += 1);
    }
}
