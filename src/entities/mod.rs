//! Entities module - the resources served by the application

pub mod dish;
pub mod order;

pub use dish::{CatalogManager, Dish, DishDescriptor};
pub use order::{LineItem, Order, OrderDescriptor, OrderManager, OrderStatus};
