//! Order item repository.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::error::AppError;
use crate::models::{NewOrderItem, OrderItem};
use crate::repositories::UnitOfWork;

/// Repository view borrowing the request's unit of work.
pub struct OrderItemRepository<'uow> {
    uow: &'uow mut UnitOfWork,
}

impl<'uow> OrderItemRepository<'uow> {
    pub(super) fn new(uow: &'uow mut UnitOfWork) -> Self {
        Self { uow }
    }

    /// Single-row lookup by primary key; absence is a valid outcome.
    pub async fn get_by_id(&mut self, item_id: i32) -> Result<Option<OrderItem>, AppError> {
        use crate::schema::order_items;

        order_items::table
            .filter(order_items::id.eq(item_id))
            .select(OrderItem::as_select())
            .first(self.uow.conn())
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Returns every order item, in no guaranteed order.
    pub async fn get_all(&mut self) -> Result<Vec<OrderItem>, AppError> {
        use crate::schema::order_items;

        order_items::table
            .select(OrderItem::as_select())
            .load(self.uow.conn())
            .await
            .map_err(AppError::from)
    }

    /// Items belonging to one order, evaluated by the store.
    pub async fn find_by_order(&mut self, parent_order_id: i32) -> Result<Vec<OrderItem>, AppError> {
        use crate::schema::order_items;

        order_items::table
            .filter(order_items::order_id.eq(parent_order_id))
            .select(OrderItem::as_select())
            .load(self.uow.conn())
            .await
            .map_err(AppError::from)
    }

    /// Stages an insert inside the open transaction and returns the created
    /// row with its store-assigned id.
    pub async fn add(&mut self, new_item: NewOrderItem) -> Result<OrderItem, AppError> {
        use crate::schema::order_items;

        let created = diesel::insert_into(order_items::table)
            .values(&new_item)
            .returning(OrderItem::as_returning())
            .get_result(self.uow.conn())
            .await?;
        self.uow.record_rows(1);
        Ok(created)
    }

    /// Stages a full-row replace keyed by the entity's id. A missing id
    /// affects zero rows and surfaces as not-found.
    pub async fn update(&mut self, item: OrderItem) -> Result<(), AppError> {
        use crate::schema::order_items;

        let affected = diesel::update(order_items::table.find(item.id))
            .set(&item)
            .execute(self.uow.conn())
            .await?;
        if affected == 0 {
            return Err(AppError::not_found("order item", item.id));
        }
        self.uow.record_rows(affected);
        Ok(())
    }

    /// Stages a delete of the given instance.
    pub async fn remove(&mut self, item: OrderItem) -> Result<(), AppError> {
        use crate::schema::order_items;

        let affected = diesel::delete(order_items::table.find(item.id))
            .execute(self.uow.conn())
            .await?;
        self.uow.record_rows(affected);
        Ok(())
    }
}
