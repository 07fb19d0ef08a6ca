//! Favorites registry
//!
//! In-memory set of favorited character ids mirrored to the key-value store,
//! one entry per id (key = value = decimal id). Every mutation writes the
//! store first and touches memory only after the write succeeded; the store
//! is the durable source of truth and [`FavoritesRegistry::reconcile`] is how
//! memory catches up with it.

use std::collections::HashSet;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use crate::error::StorageError;
use crate::store::{KeyValueStore, TypedStore};
use crate::types::CharacterId;

pub struct FavoritesRegistry {
    store: Arc<dyn KeyValueStore>,
    ids: RwLock<HashSet<CharacterId>>,
}

impl FavoritesRegistry {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            ids: RwLock::new(HashSet::new()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, HashSet<CharacterId>> {
        self.ids.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashSet<CharacterId>> {
        self.ids.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replace the in-memory set with every numeric key in the store.
    /// Non-numeric keys (the theme flag, foreign entries) are skipped.
    pub async fn reconcile(&self) -> Result<(), StorageError> {
        let ids: HashSet<CharacterId> = self.store.get_int_keys().await?.into_iter().collect();
        info!(count = ids.len(), "Reconciled favorites from storage");
        *self.write() = ids;
        Ok(())
    }

    pub async fn add(&self, id: CharacterId) -> Result<(), StorageError> {
        self.store.set_int_key(id).await?;
        self.write().insert(id);
        debug!(id, "Added favorite");
        Ok(())
    }

    pub async fn remove(&self, id: CharacterId) -> Result<(), StorageError> {
        self.store.remove_int_key(id).await?;
        self.write().remove(&id);
        debug!(id, "Removed favorite");
        Ok(())
    }

    /// Flip membership; returns whether `id` is a favorite afterwards
    pub async fn toggle(&self, id: CharacterId) -> Result<bool, StorageError> {
        if self.is_favorite(id) {
            self.remove(id).await?;
            Ok(false)
        } else {
            self.add(id).await?;
            Ok(true)
        }
    }

    pub fn is_favorite(&self, id: CharacterId) -> bool {
        self.read().contains(&id)
    }

    /// Sorted copy of the current set
    pub fn ids(&self) -> Vec<CharacterId> {
        let mut ids: Vec<_> = self.read().iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Wipe the whole store, then the in-memory set.
    /// The store is shared, so this also drops the theme flag.
    pub async fn clear_all(&self) -> Result<(), StorageError> {
        self.store.clear().await?;
        self.write().clear();
        info!("Cleared all stored entries");
        Ok(())
    }
}
