//! Store Module
//!
//! In-memory string entries and lists sharing one key namespace, plus the
//! shared `Db` handle that serializes access to them.

mod entry;
mod keyspace;
mod lists;
mod stats;
mod strings;


use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::error::Result;

// Re-export public types
pub use entry::{current_timestamp_ms, Entry};
pub use keyspace::{KeyKind, Keyspace};
pub use lists::ListStore;
pub use stats::StoreStats;
pub use strings::EntryStore;

// == Db Handle ==
/// Cloneable handle to a shared keyspace.
///
/// Every operation holds the lock for exactly that one operation. Build one
/// in `main` and hand clones to whoever needs the store.
#[derive(Debug, Clone, Default)]
pub struct Db {
    inner: Arc<RwLock<Keyspace>>,
}

impl Db {
    /// Creates a handle to a fresh, empty keyspace.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set(&self, key: String, value: String, ttl: Option<Duration>) -> Result<()> {
        self.inner.write().await.set(key, value, ttl)
    }

    /// Takes the write lock since an expired entry is removed on read.
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.write().await.get(key)
    }

    pub async fn delete(&self, key: &str) -> Result<bool> {
        self.inner.write().await.delete(key)
    }

    pub async fn push_left(&self, key: String, value: String) -> Result<usize> {
        self.inner.write().await.push_left(key, value)
    }

    pub async fn push_right(&self, key: String, value: String) -> Result<usize> {
        self.inner.write().await.push_right(key, value)
    }

    pub async fn pop_left(&self, key: &str) -> Result<Option<String>> {
        self.inner.write().await.pop_left(key)
    }

    pub async fn pop_right(&self, key: &str) -> Result<Option<String>> {
        self.inner.write().await.pop_right(key)
    }

    pub async fn length(&self, key: &str) -> Result<usize> {
        self.inner.read().await.length(key)
    }

    pub async fn kind_of(&self, key: &str) -> Option<KeyKind> {
        self.inner.read().await.kind_of(key)
    }

    pub async fn ttl_remaining_ms(&self, key: &str) -> Option<u64> {
        self.inner.read().await.ttl_remaining_ms(key)
    }

    /// Snapshot of expired keys, taken under the read lock.
    pub async fn expired_keys(&self) -> Vec<String> {
        self.inner.read().await.expired_keys()
    }

    /// Locks once and removes `key` if it is still expired.
    pub async fn remove_if_expired(&self, key: &str) -> Result<bool> {
        self.inner.write().await.remove_if_expired(key)
    }

    pub async fn stats(&self) -> StoreStats {
        self.inner.read().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
