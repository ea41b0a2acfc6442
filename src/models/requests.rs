//! Request DTOs for the store API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for `POST /command`
///
/// # Fields
/// - `command`: Command name, e.g. `"LPUSH"` (case-insensitive)
/// - `key`: The key the command operates on
/// - `args`: Positional arguments after the key (may be omitted)
#[derive(Debug, Clone, Deserialize)]
pub struct CommandRequest {
    /// Command name
    pub command: String,
    /// Target key
    pub key: String,
    /// Remaining arguments
    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.command.trim().is_empty() {
            return Some("Command cannot be empty".to_string());
        }
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        None
    }
}
