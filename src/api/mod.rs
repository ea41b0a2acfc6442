//! API Module
//!
//! HTTP handlers and routing for the store's JSON front-end.
//!
//! # Endpoints
//! - `POST /command` - Run one command (`{"command", "key", "args"}`)
//! - `GET /stats` - Get store statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
