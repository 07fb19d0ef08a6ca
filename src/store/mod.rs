//! Key-value storage
//!
//! String-keyed, string-valued durable storage shared by the favorites
//! registry and the theme preference. Typed accessors live in [`TypedStore`]
//! so string conversion stays out of the call sites.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::StorageError;

/// Raw storage contract
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a missing key is not an error
    async fn remove(&self, key: &str) -> Result<(), StorageError>;

    async fn clear(&self) -> Result<(), StorageError>;

    async fn list_keys(&self) -> Result<Vec<String>, StorageError>;
}

/// Typed wrappers over the raw string store
#[async_trait]
pub trait TypedStore: KeyValueStore {
    /// `Some(true)` only for the literal `"true"`; any other stored value is `Some(false)`
    async fn get_bool(&self, key: &str) -> Result<Option<bool>, StorageError> {
        Ok(self.get(key).await?.map(|v| v == "true"))
    }

    async fn set_bool(&self, key: &str, value: bool) -> Result<(), StorageError> {
        self.set(key, if value { "true" } else { "false" }).await
    }

    /// Every key that parses as a `u32`, so `"05"` reads as 5. Other keys are skipped.
    async fn get_int_keys(&self) -> Result<Vec<u32>, StorageError> {
        Ok(self
            .list_keys()
            .await?
            .iter()
            .filter_map(|key| key.parse::<u32>().ok())
            .collect())
    }

    /// Store an integer under its own decimal string as key and value
    async fn set_int_key(&self, id: u32) -> Result<(), StorageError> {
        let key = id.to_string();
        self.set(&key, &key).await
    }

    async fn remove_int_key(&self, id: u32) -> Result<(), StorageError> {
        self.remove(&id.to_string()).await
    }
}

impl<T: KeyValueStore + ?Sized> TypedStore for T {}
