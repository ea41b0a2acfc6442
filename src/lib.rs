//! Quickstore - A small in-memory key-value and queue store
//!
//! String entries with optional TTL and string lists share one key
//! namespace. Commands go through a dispatcher; a background reaper drops
//! expired entries.

pub mod api;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod models;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use dispatch::{Dispatcher, Reply};
pub use error::StoreError;
pub use store::Db;
pub use tasks::spawn_reaper;
