use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::models::OrderItem;

/// Order row model. Status is free text ("Pending", "Shipped", ...).
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, AsChangeset)]
#[diesel(table_name = crate::schema::orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Order {
    pub id: i32,
    pub order_date: NaiveDateTime,
    pub status: String,
    pub customer_id: i32,
}

/// Insertable order; the id is assigned by the store.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder {
    pub order_date: NaiveDateTime,
    pub status: String,
    pub customer_id: i32,
}

/// Order with its items, as hydrated by the customer eager load.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderWithItems {
    pub order: Order,
    pub items: Vec<OrderItem>,
}
