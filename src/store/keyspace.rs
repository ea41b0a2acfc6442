//! Keyspace Module
//!
//! Combines the entry and list stores under one shared key namespace.
//! A key holds at most one kind of value at a time; touching it with an
//! operation of the other kind fails with `TypeMismatch`.

use std::time::Duration;

use crate::error::{Result, StoreError};
use crate::store::{current_timestamp_ms, EntryStore, ListStore, StoreStats};

/// Kind of value currently held by a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    String,
    List,
}

// == Keyspace ==
/// All stored data plus activity counters.
#[derive(Debug, Default)]
pub struct Keyspace {
    strings: EntryStore,
    lists: ListStore,
    stats: StoreStats,
}

impl Keyspace {
    // == Constructor ==
    /// Creates an empty keyspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports which kind of value holds `key`, ignoring expired entries.
    pub fn kind_of(&self, key: &str) -> Option<KeyKind> {
        if self.lists.contains(key) {
            Some(KeyKind::List)
        } else if self.strings.holds_live(key) {
            Some(KeyKind::String)
        } else {
            None
        }
    }

    // == String Operations ==
    /// Stores a string value with an optional TTL.
    pub fn set(&mut self, key: String, value: String, ttl: Option<Duration>) -> Result<()> {
        self.ensure_not_list(&key)?;
        self.strings.set(key, value, ttl);
        Ok(())
    }

    /// Reads a string value.
    ///
    /// Expired entries are removed here and reported as absent.
    pub fn get(&mut self, key: &str) -> Result<Option<String>> {
        self.ensure_not_list(key)?;
        let now = current_timestamp_ms();
        self.purge_if_expired(key, now);

        let value = self.strings.peek(key, now);
        match value {
            Some(_) => self.stats.record_hit(),
            None => self.stats.record_miss(),
        }
        Ok(value)
    }

    /// Deletes a string value. Returns whether a live entry was removed.
    pub fn delete(&mut self, key: &str) -> Result<bool> {
        self.ensure_not_list(key)?;
        if self.purge_if_expired(key, current_timestamp_ms()) {
            return Ok(false);
        }
        Ok(self.strings.delete(key))
    }

    /// Remaining TTL of a live string entry, in milliseconds.
    pub fn ttl_remaining_ms(&self, key: &str) -> Option<u64> {
        self.strings.ttl_remaining_ms(key)
    }

    // == List Operations ==
    /// Prepends to the list at `key`. Returns the new length.
    pub fn push_left(&mut self, key: String, value: String) -> Result<usize> {
        self.ensure_not_string(&key)?;
        Ok(self.lists.push_left(key, value))
    }

    /// Appends to the list at `key`. Returns the new length.
    pub fn push_right(&mut self, key: String, value: String) -> Result<usize> {
        self.ensure_not_string(&key)?;
        Ok(self.lists.push_right(key, value))
    }

    /// Removes and returns the first element of the list at `key`.
    pub fn pop_left(&mut self, key: &str) -> Result<Option<String>> {
        self.ensure_not_string(key)?;
        Ok(self.lists.pop_left(key))
    }

    /// Removes and returns the last element of the list at `key`.
    pub fn pop_right(&mut self, key: &str) -> Result<Option<String>> {
        self.ensure_not_string(key)?;
        Ok(self.lists.pop_right(key))
    }

    /// Length of the list at `key`, 0 when absent.
    ///
    /// Takes `&self` so callers can serve it under a read lock; an expired
    /// entry on the key is treated as absent without being removed.
    pub fn length(&self, key: &str) -> Result<usize> {
        if self.strings.holds_live(key) {
            return Err(StoreError::TypeMismatch);
        }
        Ok(self.lists.length(key))
    }

    // == Expiry ==
    /// Keys whose entries have expired as of now.
    pub fn expired_keys(&self) -> Vec<String> {
        self.strings.expired_keys(current_timestamp_ms())
    }

    /// Removes the entry at `key` if it is still expired.
    ///
    /// Fails with `TypeMismatch` when the key has since been taken over by
    /// a list, so the caller can log it and move on.
    pub fn remove_if_expired(&mut self, key: &str) -> Result<bool> {
        if self.lists.contains(key) {
            return Err(StoreError::TypeMismatch);
        }
        Ok(self.purge_if_expired(key, current_timestamp_ms()))
    }

    // == Stats ==
    /// Returns a snapshot of the current statistics.
    pub fn stats(&self) -> StoreStats {
        let mut stats = self.stats.clone();
        stats.set_key_counts(self.strings.live_len(current_timestamp_ms()), self.lists.len());
        stats
    }

    /// Number of keys currently held, of both kinds.
    ///
    /// Expired entries the reaper has not reached yet do not hold their
    /// key and are not counted.
    pub fn len(&self) -> usize {
        self.strings.live_len(current_timestamp_ms()) + self.lists.len()
    }

    /// Returns true if no key is held.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // == Type Policy ==
    fn ensure_not_list(&self, key: &str) -> Result<()> {
        if self.lists.contains(key) {
            Err(StoreError::TypeMismatch)
        } else {
            Ok(())
        }
    }

    /// An expired entry does not hold its key, so it is purged before the
    /// check and the list operation proceeds.
    fn ensure_not_string(&mut self, key: &str) -> Result<()> {
        self.purge_if_expired(key, current_timestamp_ms());
        if self.strings.contains(key) {
            Err(StoreError::TypeMismatch)
        } else {
            Ok(())
        }
    }

    /// The only place an expired entry leaves the keyspace, so the
    /// `expired` counter stays exact.
    fn purge_if_expired(&mut self, key: &str, now: u64) -> bool {
        let removed = self.strings.remove_if_expired(key, now);
        if removed {
            self.stats.record_expired(1);
        }
        removed
    }
}
