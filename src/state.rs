//! Application state for the Axum router.

use crate::db::AsyncDbPool;

/// Shared state handed to every request handler.
///
/// Holds only the connection pool: the unit of work that actually owns a
/// session is constructed per request inside each handler. Cloning is cheap
/// since the pool is an Arc internally.
#[derive(Clone)]
pub struct AppState {
    /// Async database connection pool
    pub db_pool: AsyncDbPool,
}

impl AppState {
    pub fn new(db_pool: AsyncDbPool) -> Self {
        Self { db_pool }
    }
}
