use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock, RwLockMappedWriteGuard, RwLockWriteGuard};

use crate::storage::NameStore;

/// Normalized localized name -> canonical catalog key
pub type NameMap = HashMap<String, String>;

/// Persistent name map shared by every resolution in the process.
///
/// The stored copy is read lazily on first access. Storage problems never
/// surface: unreadable or corrupt data loads as an empty map, and failed
/// writes leave the in-memory map authoritative for the session.
pub struct NameMapCache {
    store: Arc<dyn NameStore>,
    key: String,
    map: RwLock<Option<NameMap>>,
    // Serializes writes so snapshots reach storage in the order they were taken
    write_gate: Mutex<()>,
}

impl NameMapCache {
    pub fn new(store: Arc<dyn NameStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            map: RwLock::new(None),
            write_gate: Mutex::new(()),
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Loaded map, reading storage on first access
    pub async fn load(&self) -> NameMap {
        self.loaded().await.clone()
    }

    pub async fn get(&self, name: &str) -> Option<String> {
        self.loaded().await.get(name).cloned()
    }

    pub async fn insert(&self, name: String, canonical_key: String) {
        self.loaded().await.insert(name, canonical_key);
    }

    pub async fn len(&self) -> usize {
        self.loaded().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Overwrite the stored copy with the in-memory map (best effort)
    pub async fn save(&self) {
        let _gate = self.write_gate.lock().await;

        let serialized = {
            let map = self.loaded().await;
            match serde_json::to_string(&*map) {
                Ok(s) => s,
                Err(e) => {
                    tracing::warn!("Failed to serialize name map: {}", e);
                    return;
                }
            }
        };

        match self.store.try_write(&self.key, &serialized).await {
            Ok(()) => tracing::debug!("Persisted name map under '{}'", self.key),
            Err(e) => tracing::warn!("Failed to persist name map: {}", e),
        }
    }

    /// Drop the in-memory copy; the next access reloads from storage
    pub async fn reset(&self) {
        *self.map.write().await = None;
    }

    /// Empty the map and remove the stored copy
    pub async fn clear(&self) {
        let _gate = self.write_gate.lock().await;
        *self.map.write().await = Some(NameMap::new());

        if let Err(e) = self.store.try_remove(&self.key).await {
            tracing::warn!("Failed to remove stored name map: {}", e);
        }
    }

    async fn loaded(&self) -> RwLockMappedWriteGuard<'_, NameMap> {
        let mut guard = self.map.write().await;
        if guard.is_none() {
            *guard = Some(self.read_store().await);
        }
        RwLockWriteGuard::map(guard, |m| m.get_or_insert_with(NameMap::new))
    }

    async fn read_store(&self) -> NameMap {
        let raw = match self.store.try_read(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return NameMap::new(),
            Err(e) => {
                tracing::warn!("Failed to read name map, starting empty: {}", e);
                return NameMap::new();
            }
        };

        match serde_json::from_str::<NameMap>(&raw) {
            Ok(map) => {
                tracing::debug!("Loaded {} cached names", map.len());
                map
            }
            Err(e) => {
                tracing::warn!("Stored name map is malformed, starting empty: {}", e);
                NameMap::new()
            }
        }
    }
}
