//! Entry Store Module
//!
//! String values keyed by name, with optional expiration checked lazily on read.

use std::collections::HashMap;
use std::time::Duration;

use crate::store::{current_timestamp_ms, Entry};

// == Entry Store ==
/// Owns every string entry in the keyspace.
#[derive(Debug, Default)]
pub struct EntryStore {
    entries: HashMap<String, Entry>,
}

impl EntryStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Set ==
    /// Inserts or replaces the entry for `key`.
    ///
    /// Passing `None` for `ttl` clears any previous expiration.
    pub fn set(&mut self, key: String, value: String, ttl: Option<Duration>) {
        self.entries.insert(key, Entry::new(value, ttl));
    }

    // == Get ==
    /// Returns a copy of the value if present and not expired.
    ///
    /// An expired entry found here is removed on the spot.
    pub fn get(&mut self, key: &str) -> Option<String> {
        if self.remove_if_expired(key, current_timestamp_ms()) {
            return None;
        }
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    /// Returns a copy of the value if it is live at `now`, leaving any
    /// expired entry in place.
    pub fn peek(&self, key: &str, now: u64) -> Option<String> {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired_at(now))
            .map(|entry| entry.value.clone())
    }

    // == Delete ==
    /// Removes the entry for `key`.
    ///
    /// Returns `true` only when a live entry was removed. An expired entry
    /// is dropped as well but counts as already absent.
    pub fn delete(&mut self, key: &str) -> bool {
        match self.entries.remove(key) {
            Some(entry) => !entry.is_expired(),
            None => false,
        }
    }

    /// Whether a live (unexpired) entry holds `key`.
    pub fn holds_live(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired())
    }

    /// Whether any entry, live or expired, is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remaining TTL in milliseconds for a live entry with an expiration.
    pub fn ttl_remaining_ms(&self, key: &str) -> Option<u64> {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .and_then(Entry::ttl_remaining_ms)
    }

    // == Expiry ==
    /// Snapshot of keys whose expiration is at or before `now`.
    pub fn expired_keys(&self, now: u64) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Removes `key` only if it is still expired at `now`.
    ///
    /// Returns whether a removal happened. A key refreshed by a later `set`
    /// is left alone.
    pub fn remove_if_expired(&mut self, key: &str, now: u64) -> bool {
        let expired = self
            .entries
            .get(key)
            .is_some_and(|entry| entry.is_expired_at(now));
        if expired {
            self.entries.remove(key);
        }
        expired
    }

    // == Length ==
    /// Number of stored entries, including expired ones not yet reaped.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of entries still live at `now`.
    pub fn live_len(&self, now: u64) -> usize {
        self.entries
            .values()
            .filter(|entry| !entry.is_expired_at(now))
            .count()
    }

    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_set_and_get() {
        let mut store = EntryStore::new();

        store.set("key1".to_string(), "value1".to_string(), None);

        assert_eq!(store.get("key1"), Some("value1".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_missing() {
        let mut store = EntryStore::new();
        assert_eq!(store.get("nope"), None);
    }

    #[test]
    fn test_overwrite_clears_ttl() {
        let mut store = EntryStore::new();

        store.set("k".to_string(), "v1".to_string(), Some(Duration::from_secs(60)));
        assert!(store.ttl_remaining_ms("k").is_some());

        store.set("k".to_string(), "v2".to_string(), None);
        assert_eq!(store.get("k"), Some("v2".to_string()));
        assert!(store.ttl_remaining_ms("k").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete() {
        let mut store = EntryStore::new();

        store.set("key1".to_string(), "value1".to_string(), None);
        assert!(store.delete("key1"));
        assert!(!store.delete("key1"));
        assert!(store.is_empty());
        assert_eq!(store.get("key1"), None);
    }

    #[test]
    fn test_delete_expired_reports_absent() {
        let mut store = EntryStore::new();

        store.set("k".to_string(), "v".to_string(), Some(Duration::ZERO));

        assert!(!store.delete("k"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_lazy_expiry_on_get() {
        let mut store = EntryStore::new();

        store.set("k".to_string(), "v".to_string(), Some(Duration::from_millis(30)));
        assert_eq!(store.get("k"), Some("v".to_string()));

        sleep(Duration::from_millis(60));

        assert_eq!(store.get("k"), None);
        assert!(!store.contains("k"), "expired entry should be removed by get");
    }

    #[test]
    fn test_remove_if_expired_respects_refresh() {
        let mut store = EntryStore::new();

        store.set("k".to_string(), "old".to_string(), Some(Duration::ZERO));
        let now = current_timestamp_ms();
        assert_eq!(store.expired_keys(now), vec!["k".to_string()]);

        // refreshed between the scan and the removal
        store.set("k".to_string(), "new".to_string(), None);

        assert!(!store.remove_if_expired("k", now));
        assert_eq!(store.get("k"), Some("new".to_string()));
    }

    #[test]
    fn test_expired_keys_skips_live_entries() {
        let mut store = EntryStore::new();

        store.set("a".to_string(), "1".to_string(), Some(Duration::ZERO));
        store.set("b".to_string(), "2".to_string(), Some(Duration::from_secs(60)));
        store.set("c".to_string(), "3".to_string(), None);

        let now = current_timestamp_ms();
        assert_eq!(store.expired_keys(now), vec!["a".to_string()]);
        assert!(store.holds_live("b"));
        assert!(store.holds_live("c"));
        assert!(!store.holds_live("a"));
    }

    #[test]
    fn test_peek_leaves_expired_entry() {
        let mut store = EntryStore::new();

        store.set("gone".to_string(), "v".to_string(), Some(Duration::ZERO));
        store.set("live".to_string(), "v".to_string(), None);

        let now = current_timestamp_ms();
        assert_eq!(store.peek("gone", now), None);
        assert_eq!(store.peek("live", now), Some("v".to_string()));
        assert!(store.contains("gone"));
    }

    #[test]
    fn test_live_len_skips_expired() {
        let mut store = EntryStore::new();

        store.set("a".to_string(), "1".to_string(), Some(Duration::ZERO));
        store.set("b".to_string(), "2".to_string(), Some(Duration::from_secs(60)));
        store.set("c".to_string(), "3".to_string(), None);

        assert_eq!(store.len(), 3);
        assert_eq!(store.live_len(current_timestamp_ms()), 2);
    }
}
