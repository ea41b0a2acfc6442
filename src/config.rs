//! Configuration Module
//!
//! Loads server configuration from environment variables once at startup.
//! The store itself never reads the environment; the resulting `Config` is
//! passed to whatever needs it.

use std::env;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Expiry reaper interval in milliseconds
    pub reaper_interval_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `REAPER_INTERVAL_MS` - Expiry reaper frequency in milliseconds (default: 100)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var::<u16>("SERVER_PORT").unwrap_or(defaults.server_port),
            reaper_interval_ms: parse_var::<u64>("REAPER_INTERVAL_MS")
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.reaper_interval_ms),
        }
    }

    /// Reaper interval as a `Duration`.
    pub fn reaper_interval(&self) -> Duration {
        Duration::from_millis(self.reaper_interval_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            reaper_interval_ms: 100,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
