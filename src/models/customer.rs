use diesel::prelude::*;

use crate::models::OrderWithItems;

/// Customer row model.
///
/// Derives Queryable/Selectable for reads and AsChangeset for the
/// full-row replace used by update (the primary key is excluded by the
/// derive, so the row is addressed by id and every other column is set).
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, AsChangeset)]
#[diesel(table_name = crate::schema::customers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Insertable customer; the id is assigned by the store.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::customers)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
}

/// Customer with its orders and their items, fully hydrated by the
/// two-level eager load.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerWithOrders {
    pub customer: Customer,
    pub orders: Vec<OrderWithItems>,
}
