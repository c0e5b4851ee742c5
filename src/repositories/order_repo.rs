//! Order repository.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::error::AppError;
use crate::models::{NewOrder, Order};
use crate::repositories::UnitOfWork;

/// Structured filter for order queries, translated into a store-side
/// predicate. Absent fields do not constrain the result.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status: Option<String>,
    pub customer_id: Option<i32>,
}

impl OrderFilter {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.customer_id.is_none()
    }
}

/// Repository view borrowing the request's unit of work.
pub struct OrderRepository<'uow> {
    uow: &'uow mut UnitOfWork,
}

impl<'uow> OrderRepository<'uow> {
    pub(super) fn new(uow: &'uow mut UnitOfWork) -> Self {
        Self { uow }
    }

    /// Single-row lookup by primary key; absence is a valid outcome.
    pub async fn get_by_id(&mut self, order_id: i32) -> Result<Option<Order>, AppError> {
        use crate::schema::orders;

        orders::table
            .filter(orders::id.eq(order_id))
            .select(Order::as_select())
            .first(self.uow.conn())
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Returns every order, in no guaranteed order.
    pub async fn get_all(&mut self) -> Result<Vec<Order>, AppError> {
        use crate::schema::orders;

        orders::table
            .select(Order::as_select())
            .load(self.uow.conn())
            .await
            .map_err(AppError::from)
    }

    /// Orders matching the filter, evaluated by the store.
    pub async fn find(&mut self, filter: OrderFilter) -> Result<Vec<Order>, AppError> {
        use crate::schema::orders;

        let mut query = orders::table.into_boxed();
        if let Some(status) = filter.status {
            query = query.filter(orders::status.eq(status));
        }
        if let Some(customer_id) = filter.customer_id {
            query = query.filter(orders::customer_id.eq(customer_id));
        }

        query
            .select(Order::as_select())
            .load(self.uow.conn())
            .await
            .map_err(AppError::from)
    }

    /// Stages an insert inside the open transaction and returns the created
    /// row with its store-assigned id.
    pub async fn add(&mut self, new_order: NewOrder) -> Result<Order, AppError> {
        use crate::schema::orders;

        let created = diesel::insert_into(orders::table)
            .values(&new_order)
            .returning(Order::as_returning())
            .get_result(self.uow.conn())
            .await?;
        self.uow.record_rows(1);
        Ok(created)
    }

    /// Stages a full-row replace keyed by the entity's id. A missing id
    /// affects zero rows and surfaces as not-found.
    pub async fn update(&mut self, order: Order) -> Result<(), AppError> {
        use crate::schema::orders;

        let affected = diesel::update(orders::table.find(order.id))
            .set(&order)
            .execute(self.uow.conn())
            .await?;
        if affected == 0 {
            return Err(AppError::not_found("order", order.id));
        }
        self.uow.record_rows(affected);
        Ok(())
    }

    /// Stages a delete of the given instance.
    pub async fn remove(&mut self, order: Order) -> Result<(), AppError> {
        use crate::schema::orders;

        let affected = diesel::delete(orders::table.find(order.id))
            .execute(self.uow.conn())
            .await?;
        self.uow.record_rows(affected);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_empty() {
        assert!(OrderFilter::default().is_empty());
    }

    #[test]
    fn filter_with_any_field_is_not_empty() {
        let filter = OrderFilter {
            status: Some("Pending".to_string()),
            customer_id: None,
        };
        assert!(!filter.is_empty());
    }
}
