//! Store Statistics Module
//!
//! Tracks read hits, misses and expirations.

use serde::Serialize;

// == Store Stats ==
/// Counters describing store activity.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StoreStats {
    /// String reads that found a live value
    pub hits: u64,
    /// String reads that found nothing (absent or expired)
    pub misses: u64,
    /// Entries removed because their TTL elapsed
    pub expired: u64,
    /// Current number of string entries
    pub string_keys: usize,
    /// Current number of lists
    pub list_keys: usize,
}

impl StoreStats {
    // == Constructor ==
    /// Creates a new StoreStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no reads have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_expired(&mut self, count: usize) {
        self.expired += count as u64;
    }

    // == Update Key Counts ==
    /// Updates the per-type key counts.
    pub fn set_key_counts(&mut self, string_keys: usize, list_keys: usize) {
        self.string_keys = string_keys;
        self.list_keys = list_keys;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = StoreStats::new();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.expired, 0);
        assert_eq!(stats.string_keys, 0);
        assert_eq!(stats.list_keys, 0);
    }

    #[test]
    fn test_hit_rate() {
        let mut stats = StoreStats::new();
        assert_eq!(stats.hit_rate(), 0.0);

        for _ in 0..3 {
            stats.record_hit();
        }
        stats.record_miss();

        assert!((stats.hit_rate() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_record_expired_accumulates() {
        let mut stats = StoreStats::new();
        stats.record_expired(2);
        stats.record_expired(3);
        assert_eq!(stats.expired, 5);
    }
}
