//! Per-request unit of work.
//!
//! A [`UnitOfWork`] owns one pooled database connection with an open
//! transaction for the lifetime of a single request. Repository views borrow
//! it, so every read and every staged write in a request shares the same
//! session. Mutations execute inside the open transaction: they are visible
//! to the session but reach durable storage only when [`UnitOfWork::complete`]
//! commits. Dropping an uncompleted unit of work rolls the transaction back
//! and returns the connection to the pool.

use bb8::PooledConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::{AnsiTransactionManager, AsyncPgConnection, TransactionManager};

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::repositories::{
    CustomerRepository, OrderItemRepository, OrderRepository, ProductRepository,
};

type OwnedConn = PooledConnection<'static, AsyncDieselConnectionManager<AsyncPgConnection>>;

/// One logical transaction scope, aggregating the four entity repositories
/// over a single database session.
pub struct UnitOfWork {
    // Some until complete() takes it or Drop hands it to the rollback task.
    conn: Option<OwnedConn>,
    rows_affected: usize,
}

impl UnitOfWork {
    /// Checks a connection out of the pool and opens a transaction on it.
    pub async fn begin(pool: &AsyncDbPool) -> Result<Self, AppError> {
        let mut conn = pool.get_owned().await?;
        AnsiTransactionManager::begin_transaction(&mut *conn).await?;
        Ok(Self {
            conn: Some(conn),
            rows_affected: 0,
        })
    }

    /// Customer repository view over this unit of work.
    pub fn customers(&mut self) -> CustomerRepository<'_> {
        CustomerRepository::new(self)
    }

    /// Product repository view over this unit of work.
    pub fn products(&mut self) -> ProductRepository<'_> {
        ProductRepository::new(self)
    }

    /// Order repository view over this unit of work.
    pub fn orders(&mut self) -> OrderRepository<'_> {
        OrderRepository::new(self)
    }

    /// Order item repository view over this unit of work.
    pub fn order_items(&mut self) -> OrderItemRepository<'_> {
        OrderItemRepository::new(self)
    }

    /// Commits every staged change as one atomic transaction.
    ///
    /// Returns the number of rows affected across all staged changes. On
    /// failure nothing is applied; the store rolls the transaction back.
    pub async fn complete(mut self) -> Result<usize, AppError> {
        let mut conn = self
            .conn
            .take()
            .expect("unit of work connection is held until commit or drop");
        AnsiTransactionManager::commit_transaction(&mut *conn).await?;
        Ok(self.rows_affected)
    }

    pub(crate) fn conn(&mut self) -> &mut AsyncPgConnection {
        self.conn
            .as_deref_mut()
            .expect("unit of work connection is held until commit or drop")
    }

    pub(crate) fn record_rows(&mut self, count: usize) {
        self.rows_affected += count;
    }
}

impl Drop for UnitOfWork {
    fn drop(&mut self) {
        // Abandoned without complete(): roll back so the connection goes
        // back to the pool without an open transaction.
        if let Some(mut conn) = self.conn.take() {
            tokio::spawn(async move {
                if let Err(error) = AnsiTransactionManager::rollback_transaction(&mut *conn).await {
                    tracing::warn!(error = %error, "Failed to roll back abandoned unit of work");
                }
            });
        }
    }
}
