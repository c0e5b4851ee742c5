//! Database access module.
//!
//! Async PostgreSQL connection pooling (diesel_async + bb8) and embedded
//! schema migrations.

mod migrate;
mod pool;

pub use migrate::{pending_migration_names, run_pending_migrations};
pub use pool::{AsyncDbPool, MIGRATIONS, establish_async_connection_pool};
