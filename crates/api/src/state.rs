use std::sync::Arc;

use deadlinedash_db::Db;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// In-memory store handle.
    pub db: Db,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
}
