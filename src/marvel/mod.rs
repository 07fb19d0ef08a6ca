//! Remote character source
//!
//! The Marvel public API is consumed through [`CharacterSource`] so the
//! catalog can be driven by the HTTP client or by a fixed list in tests.

mod client;
mod types;

pub use client::{request_signature, MarvelClient};
pub use types::{Available, CharacterDataWrapper, RawCharacter, Thumbnail};

use async_trait::async_trait;

use crate::error::CatalogError;

#[async_trait]
pub trait CharacterSource: Send + Sync {
    /// Fetch at most `limit` raw records, in API order
    async fn fetch_characters(&self, limit: usize) -> Result<Vec<RawCharacter>, CatalogError>;
}

/// Stand-in when no API client could be built; every fetch fails with `reason`
#[derive(Debug, Clone)]
pub struct OfflineSource {
    reason: String,
}

impl OfflineSource {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

#[async_trait]
impl CharacterSource for OfflineSource {
    async fn fetch_characters(&self, _limit: usize) -> Result<Vec<RawCharacter>, CatalogError> {
        Err(CatalogError::Unavailable(self.reason.clone()))
    }
}
