use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing::debug;

use crate::Result;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Durable, process-external key-value storage.
///
/// This is the persistence boundary the favorites store sits on. Writes
/// replace the whole value for a key; a reader never observes a partial
/// value. Removing a key is distinct from setting it to an empty value.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Returns the stored value, or `None` when the key was never set
    /// (or has been removed).
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Atomically replaces the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Deletes the key entirely. Removing an absent key is a no-op.
    async fn remove(&self, key: &str) -> Result<()>;

    /// Whether the key currently holds a value. Lets diagnostics tell
    /// "never initialized" apart from "explicitly emptied".
    async fn contains(&self, key: &str) -> Result<bool>;
}

/// File-per-key backend under a single directory.
///
/// Writes go to a sibling temp file first and are renamed into place, so
/// a crash mid-write leaves the previous value intact.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Map a key to a file path. Characters that don't belong in file
    /// names are replaced, so distinct keys could collide after
    /// sanitizing; callers are expected to use a small fixed key set.
    fn entry_path(&self, key: &str) -> Result<PathBuf> {
        let sanitized: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                    c
                } else {
                    '-'
                }
            })
            .collect();

        if sanitized.trim_matches(|c| c == '-' || c == '.').is_empty() {
            return Err(StoreError::InvalidKey(key.to_string()));
        }

        Ok(self.dir.join(format!("{}.json", sanitized)))
    }
}

#[async_trait]
impl StorageBackend for FileBackend {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.entry_path(key)?;
        tokio::fs::create_dir_all(&self.dir).await?;

        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, value).await?;
        tokio::fs::rename(&tmp, &path).await?;
        debug!(key, bytes = value.len(), "persisted storage entry");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.entry_path(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn contains(&self, key: &str) -> Result<bool> {
        let path = self.entry_path(key)?;
        Ok(exists(&path).await)
    }
}

async fn exists(path: &Path) -> bool {
    tokio::fs::metadata(path).await.is_ok()
}

/// In-memory backend for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.lock().remove(key);
        Ok(())
    }

    async fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.lock().contains_key(key))
    }
}
