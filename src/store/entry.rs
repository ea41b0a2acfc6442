//! Entry Module
//!
//! Defines a single string record with optional expiration.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == Entry ==
/// A string value plus its expiration metadata.
#[derive(Debug, Clone)]
pub struct Entry {
    /// The stored value
    pub value: String,
    /// Expiration timestamp (Unix milliseconds), None = no expiration
    pub expires_at: Option<u64>,
}

impl Entry {
    // == Constructor ==
    /// Creates a new entry with an optional time to live.
    ///
    /// A zero `ttl` produces an entry that is already expired.
    pub fn new(value: String, ttl: Option<Duration>) -> Self {
        let now = current_timestamp_ms();
        let expires_at = ttl.map(|ttl| now.saturating_add(duration_to_ms(ttl)));

        Self { value, expires_at }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at the current time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }

    /// Checks expiry against a caller-supplied clock reading.
    ///
    /// An entry is expired once `now >= expires_at`.
    pub fn is_expired_at(&self, now: u64) -> bool {
        matches!(self.expires_at, Some(expires) if now >= expires)
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, or None if no expiration is set.
    ///
    /// # Returns
    /// - `Some(0)` if the entry has expired
    /// - `Some(remaining_ms)` if the entry has TTL and hasn't expired
    /// - `None` if the entry never expires
    pub fn ttl_remaining_ms(&self) -> Option<u64> {
        self.expires_at
            .map(|expires| expires.saturating_sub(current_timestamp_ms()))
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(duration_to_ms)
        .unwrap_or(0)
}

fn duration_to_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
