//! Character catalog
//!
//! Holds the normalized character list of the current session plus its
//! load status, and publishes every change as a [`CatalogSnapshot`] on a
//! watch channel.
//!
//! Overlapping refreshes: each call takes a generation number. A result is
//! applied only if no newer refresh was started in the meantime, so the
//! status stays `Loading` until the most recent call settles.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::constants::api::FETCH_LIMIT;
use crate::error::CatalogError;
use crate::marvel::CharacterSource;
use crate::normalizer;
use crate::types::{Character, CharacterId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CatalogStatus {
    Idle,
    Loading,
    Ready,
    Failed { reason: String },
}

/// Status plus the list it describes. The list is empty unless `Ready`,
/// except while `Loading` after an earlier successful load.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub status: CatalogStatus,
    pub characters: Arc<[Character]>,
}

impl CatalogSnapshot {
    fn idle() -> Self {
        Self {
            status: CatalogStatus::Idle,
            characters: Arc::from(Vec::new()),
        }
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }
}

pub struct Catalog {
    source: Arc<dyn CharacterSource>,
    /// Generation of the most recently started refresh
    generation: AtomicU64,
    snapshot: watch::Sender<CatalogSnapshot>,
}

impl Catalog {
    pub fn new(source: Arc<dyn CharacterSource>) -> Self {
        let (snapshot, _) = watch::channel(CatalogSnapshot::idle());
        Self {
            source,
            generation: AtomicU64::new(0),
            snapshot,
        }
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        self.snapshot.borrow().clone()
    }

    pub fn status(&self) -> CatalogStatus {
        self.snapshot.borrow().status.clone()
    }

    /// Receiver notified on every status change
    pub fn subscribe(&self) -> watch::Receiver<CatalogSnapshot> {
        self.snapshot.subscribe()
    }

    pub fn get(&self, id: CharacterId) -> Option<Character> {
        self.snapshot.borrow().get(id).cloned()
    }

    /// Number of characters in the current list
    pub fn len(&self) -> usize {
        self.snapshot.borrow().characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fetch, normalize and publish a fresh list. Never retries.
    /// Returns the status observable once this call settles.
    pub async fn refresh(&self) -> CatalogStatus {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.snapshot.send_modify(|snapshot| snapshot.status = CatalogStatus::Loading);
        debug!(generation, "Catalog refresh started");

        let result = self.load().await;

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "Discarding superseded catalog refresh");
            return self.status();
        }

        let next = match result {
            Ok(characters) => {
                info!(count = characters.len(), generation, "Catalog ready");
                CatalogSnapshot {
                    status: CatalogStatus::Ready,
                    characters: Arc::from(characters),
                }
            }
            Err(e) => {
                error!(error = %e, generation, "Catalog refresh failed");
                CatalogSnapshot {
                    status: CatalogStatus::Failed { reason: e.to_string() },
                    characters: Arc::from(Vec::new()),
                }
            }
        };
        let status = next.status.clone();
        self.snapshot.send_replace(next);
        status
    }

    async fn load(&self) -> Result<Vec<Character>, CatalogError> {
        let raws = self.source.fetch_characters(FETCH_LIMIT).await?;
        Ok(normalizer::normalize_all(&raws)?)
    }
}
