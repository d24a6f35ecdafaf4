//! Entity descriptor for Order

use super::handlers::{create_order, delete_order, get_order, list_orders, update_order};
use super::manager::OrderManager;
use super::model::Order;
use crate::core::Entity;
use crate::server::EntityDescriptor;
use axum::{Router, routing::get};

/// Descriptor for the Order entity
pub struct OrderDescriptor {
    pub orders: OrderManager,
}

impl OrderDescriptor {
    pub fn new(orders: OrderManager) -> Self {
        Self { orders }
    }
}

impl EntityDescriptor for OrderDescriptor {
    fn entity_type(&self) -> &str {
        Order::resource_name_singular()
    }

    fn plural(&self) -> &str {
        Order::resource_name()
    }

    fn build_routes(&self) -> Router {
        let collection = format!("/{}", Order::resource_name());
        let item = format!("{}/{{id}}", collection);

        Router::new()
            .route(&collection, get(list_orders).post(create_order))
            .route(&item, get(get_order).put(update_order).delete(delete_order))
            .with_state(self.orders.clone())
    }
}
