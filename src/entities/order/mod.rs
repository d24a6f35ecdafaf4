//! Order entity module

pub mod descriptor;
pub mod handlers;
pub mod manager;
pub mod model;

pub use descriptor::OrderDescriptor;
pub use manager::OrderManager;
pub use model::{LineItem, Order, OrderDraft, OrderStatus};
