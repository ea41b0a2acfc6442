//! Response DTOs for the store API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::dispatch::Reply;
use crate::store::StoreStats;

/// Response body for `POST /command`
#[derive(Debug, Clone, Serialize)]
pub struct CommandResponse {
    /// Tagged command result
    pub result: Reply,
}

impl CommandResponse {
    /// Creates a new CommandResponse
    pub fn new(result: Reply) -> Self {
        Self { result }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Reads that found a live value
    pub hits: u64,
    /// Reads that found nothing
    pub misses: u64,
    /// Entries removed after their TTL elapsed
    pub expired: u64,
    /// Current number of string keys
    pub string_keys: usize,
    /// Current number of list keys
    pub list_keys: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<StoreStats> for StatsResponse {
    fn from(stats: StoreStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            expired: stats.expired,
            string_keys: stats.string_keys,
            list_keys: stats.list_keys,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
