//! Customer repository.
//!
//! CRUD access to the customers table plus the eager-loading read that
//! hydrates a customer together with its orders and their items.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::error::AppError;
use crate::models::{Customer, CustomerWithOrders, NewCustomer, Order, OrderItem, OrderWithItems};
use crate::repositories::UnitOfWork;

/// Repository view borrowing the request's unit of work.
pub struct CustomerRepository<'uow> {
    uow: &'uow mut UnitOfWork,
}

impl<'uow> CustomerRepository<'uow> {
    pub(super) fn new(uow: &'uow mut UnitOfWork) -> Self {
        Self { uow }
    }

    /// Single-row lookup by primary key; absence is a valid outcome.
    pub async fn get_by_id(&mut self, customer_id: i32) -> Result<Option<Customer>, AppError> {
        use crate::schema::customers::dsl::*;

        customers
            .filter(id.eq(customer_id))
            .select(Customer::as_select())
            .first(self.uow.conn())
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Returns every customer, in no guaranteed order.
    pub async fn get_all(&mut self) -> Result<Vec<Customer>, AppError> {
        use crate::schema::customers::dsl::*;

        customers
            .select(Customer::as_select())
            .load(self.uow.conn())
            .await
            .map_err(AppError::from)
    }

    /// Customers matching the given email, evaluated by the store.
    pub async fn find_by_email(&mut self, customer_email: &str) -> Result<Vec<Customer>, AppError> {
        use crate::schema::customers::dsl::*;

        customers
            .filter(email.eq(customer_email))
            .select(Customer::as_select())
            .load(self.uow.conn())
            .await
            .map_err(AppError::from)
    }

    /// Stages an insert inside the open transaction and returns the created
    /// row with its store-assigned id. Durable only once the unit of work
    /// commits.
    pub async fn add(&mut self, new_customer: NewCustomer) -> Result<Customer, AppError> {
        use crate::schema::customers::dsl::*;

        let created = diesel::insert_into(customers)
            .values(&new_customer)
            .returning(Customer::as_returning())
            .get_result(self.uow.conn())
            .await?;
        self.uow.record_rows(1);
        Ok(created)
    }

    /// Stages a full-row replace keyed by the entity's id. A missing id
    /// affects zero rows and surfaces as not-found.
    pub async fn update(&mut self, customer: Customer) -> Result<(), AppError> {
        use crate::schema::customers::dsl::*;

        let affected = diesel::update(customers.find(customer.id))
            .set(&customer)
            .execute(self.uow.conn())
            .await?;
        if affected == 0 {
            return Err(AppError::not_found("customer", customer.id));
        }
        self.uow.record_rows(affected);
        Ok(())
    }

    /// Stages a delete of the given instance.
    pub async fn remove(&mut self, customer: Customer) -> Result<(), AppError> {
        use crate::schema::customers::dsl::*;

        let affected = diesel::delete(customers.find(customer.id))
            .execute(self.uow.conn())
            .await?;
        self.uow.record_rows(affected);
        Ok(())
    }

    /// Two-level eager load: the customer row, its orders, and each order's
    /// items in one nested left-join query. Returns `None` when the customer
    /// id does not exist.
    pub async fn get_with_orders(
        &mut self,
        customer_id: i32,
    ) -> Result<Option<CustomerWithOrders>, AppError> {
        use crate::schema::{customers, order_items, orders};

        let rows: Vec<(Customer, Option<Order>, Option<OrderItem>)> = customers::table
            .left_join(orders::table.left_join(order_items::table))
            .filter(customers::id.eq(customer_id))
            .select((
                Customer::as_select(),
                Option::<Order>::as_select(),
                Option::<OrderItem>::as_select(),
            ))
            .load(self.uow.conn())
            .await?;

        Ok(hydrate_customer_graph(rows))
    }
}

/// Groups flat join rows into the customer graph. Each order appears once
/// per item row; items attach to the order they were joined against.
fn hydrate_customer_graph(
    rows: Vec<(Customer, Option<Order>, Option<OrderItem>)>,
) -> Option<CustomerWithOrders> {
    let mut rows = rows.into_iter();
    let (customer, first_order, first_item) = rows.next()?;

    let mut orders: Vec<OrderWithItems> = Vec::new();
    for (order, item) in std::iter::once((first_order, first_item))
        .chain(rows.map(|(_, order, item)| (order, item)))
    {
        let Some(order) = order else { continue };
        let pos = match orders.iter().position(|o| o.order.id == order.id) {
            Some(pos) => pos,
            None => {
                orders.push(OrderWithItems {
                    order,
                    items: Vec::new(),
                });
                orders.len() - 1
            }
        };
        if let Some(item) = item {
            orders[pos].items.push(item);
        }
    }

    Some(CustomerWithOrders { customer, orders })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn customer() -> Customer {
        Customer {
            id: 1,
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        }
    }

    fn order(id: i32) -> Order {
        Order {
            id,
            order_date: NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
            status: "Pending".to_string(),
            customer_id: 1,
        }
    }

    fn item(id: i32, order_id: i32) -> OrderItem {
        OrderItem {
            id,
            order_id,
            product_id: 7,
            quantity: 2,
            unit_price: "9.99".parse().unwrap(),
        }
    }

    #[test]
    fn empty_result_means_absent_customer() {
        assert_eq!(hydrate_customer_graph(Vec::new()), None);
    }

    #[test]
    fn customer_without_orders_hydrates_empty_graph() {
        let graph = hydrate_customer_graph(vec![(customer(), None, None)]).unwrap();
        assert_eq!(graph.customer.id, 1);
        assert!(graph.orders.is_empty());
    }

    #[test]
    fn items_attach_to_their_order() {
        let rows = vec![
            (customer(), Some(order(10)), Some(item(100, 10))),
            (customer(), Some(order(10)), Some(item(101, 10))),
            (customer(), Some(order(11)), Some(item(102, 11))),
        ];
        let graph = hydrate_customer_graph(rows).unwrap();
        assert_eq!(graph.orders.len(), 2);
        assert_eq!(graph.orders[0].order.id, 10);
        assert_eq!(graph.orders[0].items.len(), 2);
        assert_eq!(graph.orders[1].order.id, 11);
        assert_eq!(graph.orders[1].items.len(), 1);
    }

    #[test]
    fn order_without_items_keeps_empty_item_list() {
        let rows = vec![
            (customer(), Some(order(10)), None),
            (customer(), Some(order(11)), Some(item(102, 11))),
        ];
        let graph = hydrate_customer_graph(rows).unwrap();
        assert_eq!(graph.orders.len(), 2);
        assert!(graph.orders[0].items.is_empty());
        assert_eq!(graph.orders[1].items.len(), 1);
    }
}
