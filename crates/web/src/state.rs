use std::sync::Arc;

use folio_db::bootstrap::Bootstrap;
use folio_db::DbPool;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The bootstrap guard lives here so every request sees the same one-time
/// setup state for the process lifetime.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (lazy).
    pub pool: DbPool,
    /// One-time schema/seed setup guard.
    pub bootstrap: Arc<Bootstrap>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
