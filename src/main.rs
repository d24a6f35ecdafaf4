//! GrubDash server binary
//!
//! Reads configuration (see [`grubdash::config`]), loads seed data into
//! in-memory stores and serves the REST API until SIGTERM or Ctrl+C.

use anyhow::Result;
use grubdash::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::from_env()?;
    init_tracing(&config.log_filter);

    let module = RestaurantModule::in_memory();

    if !config.seed.is_empty() {
        module.catalog().seed(config.seed.dishes).await?;
        module.orders().seed(config.seed.orders).await?;
    }

    ServerBuilder::new()
        .register_module(module)
        .serve(&config.bind_addr)
        .await
}
