//! Async database connection pool.
//!
//! Uses the bb8 pool manager with diesel_async PostgreSQL connections.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::Pool;
use diesel_migrations::{EmbeddedMigrations, embed_migrations};

use crate::config::DatabaseConfig;
use crate::error::AppError;

/// Schema migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Async connection pool type alias.
///
/// bb8::Pool uses Arc internally, so Clone is a reference count increment;
/// structures holding an AsyncDbPool can derive Clone without extra wrapping.
pub type AsyncDbPool = Pool<AsyncPgConnection>;

/// Creates the async database connection pool from database settings.
///
/// # Errors
///
/// Returns `AppError::ConnectionPool` if the pool cannot reach the database
/// while establishing its initial connections.
pub async fn establish_async_connection_pool(
    config: &DatabaseConfig,
) -> Result<AsyncDbPool, AppError> {
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(&config.url);
    let pool = Pool::builder()
        .max_size(config.max_connections)
        .min_idle(Some(config.min_connections))
        .connection_timeout(Duration::from_secs(config.connection_timeout))
        .build(manager)
        .await?;
    Ok(pool)
}
