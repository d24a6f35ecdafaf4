//! Shared setup for the HTTP integration tests

#![allow(dead_code)]

use axum_test::TestServer;
use grubdash::prelude::*;
use serde_json::Value;
use std::sync::Arc;

/// Module with in-memory stores and sequential ids ("1", "2", ...)
pub fn module() -> RestaurantModule {
    let catalog = CatalogManager::new(
        Arc::new(InMemoryDataService::new()),
        Arc::new(SequentialIdGenerator::default()),
    );
    let orders = OrderManager::new(
        Arc::new(InMemoryDataService::new()),
        Arc::new(SequentialIdGenerator::default()),
    );
    RestaurantModule::new(catalog, orders)
}

pub fn server_for(module: RestaurantModule) -> TestServer {
    let app = ServerBuilder::new().register_module(module).build();
    TestServer::new(app)
}

pub fn server() -> TestServer {
    server_for(module())
}

pub fn taco() -> Value {
    json!({
        "name": "Taco",
        "description": "Spicy",
        "price": 5,
        "image_url": "http://x/y.png"
    })
}

pub fn new_order() -> Value {
    json!({
        "deliverTo": "308 Negra Arroyo Lane",
        "mobileNumber": "(505) 143-3369",
        "dishes": [
            {
                "dishId": "90c3d873684bf381dfab29034b5bba73",
                "name": "Falafel and tahini bagel",
                "price": 6,
                "quantity": 1
            }
        ]
    })
}

/// Replace (or add) one key of a JSON object
pub fn with(mut payload: Value, key: &str, value: Value) -> Value {
    payload[key] = value;
    payload
}

pub fn without(mut payload: Value, key: &str) -> Value {
    if let Some(map) = payload.as_object_mut() {
        map.remove(key);
    }
    payload
}
