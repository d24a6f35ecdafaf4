//! # GrubDash
//!
//! REST service for a restaurant's dish catalog and delivery orders.
//!
//! ## Resources
//!
//! - **Dishes** (`/dishes`): list, create, read, update. Every dish has a
//!   name, description, image URL and a positive integer price.
//! - **Orders** (`/orders`): list, create, read, update, delete. An order has a
//!   delivery address, a mobile number, a status and a non-empty list of line
//!   items with positive integer quantities. Delivered orders are immutable and
//!   only pending orders can be deleted.
//!
//! Bodies use a `{ "data": ... }` envelope in both directions; errors are
//! `{ "message": ... }`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use grubdash::prelude::*;
//!
//! let module = RestaurantModule::in_memory();
//! let dish = module
//!     .catalog()
//!     .create(json!({
//!         "name": "Taco",
//!         "description": "Spicy",
//!         "price": 5,
//!         "image_url": "http://x/y.png"
//!     }))
//!     .await?;
//!
//! ServerBuilder::new()
//!     .register_module(module)
//!     .serve("127.0.0.1:5000")
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod logging;
pub mod module;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        DataPayload, DataResponse, DataService, Entity, IdGenerator, Module, RecordId,
        RequestError, SequentialIdGenerator, ServiceError, UuidIdGenerator, ValidationError,
        ValidationPipeline,
    };

    // === Entities ===
    pub use crate::entities::{
        CatalogManager, Dish, LineItem, Order, OrderManager, OrderStatus,
    };
    pub use crate::module::RestaurantModule;

    // === Storage ===
    #[cfg(feature = "in-memory")]
    pub use crate::storage::InMemoryDataService;

    // === Config ===
    pub use crate::config::{SeedData, ServiceConfig};
    pub use crate::logging::init_tracing;

    // === Server ===
    pub use crate::server::{EntityDescriptor, EntityRegistry, ServerBuilder};

    // === External dependencies ===
    pub use serde_json::json;
}
