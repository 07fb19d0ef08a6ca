//! Application state root
//!
//! Owns the catalog, the favorites registry and the theme preference. Built
//! once by `main` and handed to the front end by reference.

use std::sync::Arc;

use tracing::{info, warn};

use crate::catalog::{Catalog, CatalogStatus};
use crate::error::StorageError;
use crate::favorites::FavoritesRegistry;
use crate::marvel::CharacterSource;
use crate::store::KeyValueStore;
use crate::theme::ThemePreference;

pub struct AppState {
    pub catalog: Catalog,
    pub favorites: FavoritesRegistry,
    pub theme: ThemePreference,
}

impl AppState {
    pub fn new(source: Arc<dyn CharacterSource>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            catalog: Catalog::new(source),
            favorites: FavoritesRegistry::new(Arc::clone(&store)),
            theme: ThemePreference::new(store),
        }
    }

    /// Restore preferences from storage, without touching the network
    pub async fn restore_preferences(&self) {
        let (favorites, ()) = tokio::join!(self.favorites.reconcile(), self.theme.reconcile());
        if let Err(e) = favorites {
            warn!(error = %e, "Failed to reconcile favorites, starting with none");
        }
    }

    /// Session startup: catalog fetch and both reconciliations run concurrently
    pub async fn startup(&self) -> CatalogStatus {
        let (status, ()) = tokio::join!(self.catalog.refresh(), self.restore_preferences());
        info!(
            status = ?status,
            favorites = self.favorites.len(),
            theme = self.theme.theme().label(),
            "Startup complete"
        );
        status
    }

    /// Wipe storage and bring both registries back in line with it
    pub async fn clear_storage(&self) -> Result<(), StorageError> {
        self.favorites.clear_all().await?;
        self.theme.reconcile().await;
        Ok(())
    }
}
