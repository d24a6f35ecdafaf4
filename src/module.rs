//! Module definition for the restaurant ordering service
//!
//! Groups the dish catalog and the order book behind one [`Module`] so the
//! server can register both in one call.

use crate::core::Module;
use crate::entities::{CatalogManager, DishDescriptor, OrderDescriptor, OrderManager};
use crate::server::EntityRegistry;

/// Restaurant module: dishes and orders
///
/// The two managers are independent; order line items name dishes but are not
/// checked against the catalog.
#[derive(Clone)]
pub struct RestaurantModule {
    catalog: CatalogManager,
    orders: OrderManager,
}

impl RestaurantModule {
    pub fn new(catalog: CatalogManager, orders: OrderManager) -> Self {
        Self { catalog, orders }
    }

    #[cfg(feature = "in-memory")]
    pub fn in_memory() -> Self {
        Self::new(CatalogManager::in_memory(), OrderManager::in_memory())
    }

    pub fn catalog(&self) -> &CatalogManager {
        &self.catalog
    }

    pub fn orders(&self) -> &OrderManager {
        &self.orders
    }
}

impl Module for RestaurantModule {
    fn name(&self) -> &str {
        "grubdash"
    }

    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    fn entity_types(&self) -> Vec<&str> {
        vec!["dish", "order"]
    }

    fn register_entities(&self, registry: &mut EntityRegistry) {
        registry.register(Box::new(DishDescriptor::new(self.catalog.clone())));
        registry.register(Box::new(OrderDescriptor::new(self.orders.clone())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registers_both_entities() {
        let module = RestaurantModule::in_memory();
        let mut registry = EntityRegistry::new();
        module.register_entities(&mut registry);
        assert_eq!(registry.entity_types(), module.entity_types());
        assert_eq!(registry.collection_paths(), vec!["/dishes", "/orders"]);
    }
}
