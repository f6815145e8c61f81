//! # Store Module
//!
//! Asynchronous string key-value persistence used by the favorites
//! repository. The store knows nothing about what it holds; encoding and
//! decoding live with the caller.
//!
//! ## Implementations
//!
//! - [`FileStore`] - one file per key below the application data directory,
//!   durable across restarts
//! - [`MemoryStore`] - process-local map, used for tests and for injecting a
//!   throwaway store
//!
//! ## Atomicity
//!
//! Each `get` and each `set` is atomic on its own. Nothing spans a `get`
//! followed by a `set`, so read-modify-write callers can interleave.

mod file;
mod memory;

use async_trait::async_trait;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Asynchronous get/set over string keys and string values.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored at `key`, or `None` if nothing was ever
    /// written there.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replaces the value at `key`. On error the previous value is left in
    /// place.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[async_trait]
impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value).await
    }
}
