//! Dish entity module

pub mod descriptor;
pub mod handlers;
pub mod manager;
pub mod model;

pub use descriptor::DishDescriptor;
pub use manager::CatalogManager;
pub use model::{Dish, DishDraft};
