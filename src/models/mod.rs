mod customer;
mod order;
mod order_item;
mod product;

pub use customer::{Customer, CustomerWithOrders, NewCustomer};
pub use order::{NewOrder, Order, OrderWithItems};
pub use order_item::{NewOrderItem, OrderItem};
pub use product::{NewProduct, Product};
