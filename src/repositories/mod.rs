//! Repository layer.
//!
//! One repository per entity, all borrowing the request's [`UnitOfWork`]:
//! reads go straight to the store over the shared session, mutations execute
//! inside the unit of work's open transaction and become durable when it
//! completes.

mod customer_repo;
mod order_item_repo;
mod order_repo;
mod product_repo;
mod unit_of_work;

pub use customer_repo::CustomerRepository;
pub use order_item_repo::OrderItemRepository;
pub use order_repo::{OrderFilter, OrderRepository};
pub use product_repo::ProductRepository;
pub use unit_of_work::UnitOfWork;
