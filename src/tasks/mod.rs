//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Expiry Reaper: removes expired entries at the configured interval

mod reaper;

pub use reaper::{reap_expired, spawn_reaper};
