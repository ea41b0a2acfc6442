//! API Handlers
//!
//! HTTP request handlers for each endpoint.

use axum::{extract::State, Json};
use tracing::debug;

use crate::dispatch::Dispatcher;
use crate::error::{Result, StoreError};
use crate::models::{CommandRequest, CommandResponse, HealthResponse, StatsResponse};
use crate::store::Db;

/// Application state shared across all handlers.
///
/// Wraps a dispatcher over an explicitly constructed `Db`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Command dispatcher over the shared store
    pub dispatcher: Dispatcher,
}

impl AppState {
    /// Creates a new AppState serving the given store.
    pub fn new(db: Db) -> Self {
        Self {
            dispatcher: Dispatcher::new(db),
        }
    }

    /// The underlying store handle.
    pub fn db(&self) -> &Db {
        self.dispatcher.db()
    }
}

/// Handler for POST /command
///
/// Runs one command and returns its tagged result.
pub async fn command_handler(
    State(state): State<AppState>,
    Json(req): Json<CommandRequest>,
) -> Result<Json<CommandResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(StoreError::InvalidRequest(error_msg));
    }

    let result = state
        .dispatcher
        .execute(&req.command, &req.key, &req.args)
        .await
        .inspect_err(|err| {
            debug!(command = %req.command, key = %req.key, error = %err, "Command failed")
        })?;

    Ok(Json(CommandResponse::new(result)))
}

/// Handler for GET /stats
///
/// Returns current store statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.db().stats().await))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
