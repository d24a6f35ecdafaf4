//! Entity descriptor for Dish

use super::handlers::{create_dish, get_dish, list_dishes, update_dish};
use super::manager::CatalogManager;
use super::model::Dish;
use crate::core::Entity;
use crate::server::EntityDescriptor;
use axum::{Router, routing::get};

/// Descriptor for the Dish entity
pub struct DishDescriptor {
    pub catalog: CatalogManager,
}

impl DishDescriptor {
    pub fn new(catalog: CatalogManager) -> Self {
        Self { catalog }
    }
}

impl EntityDescriptor for DishDescriptor {
    fn entity_type(&self) -> &str {
        Dish::resource_name_singular()
    }

    fn plural(&self) -> &str {
        Dish::resource_name()
    }

    fn build_routes(&self) -> Router {
        let collection = format!("/{}", Dish::resource_name());
        let item = format!("{}/{{id}}", collection);

        Router::new()
            .route(&collection, get(list_dishes).post(create_dish))
            .route(&item, get(get_dish).put(update_dish))
            .with_state(self.catalog.clone())
    }
}
