//! Catalog manager: validation and lifecycle of dishes

use super::model::{Dish, DishDraft};
use crate::core::validation::validators::{
    decode, id_matches_route, integer, positive, required, required_text,
};
use crate::core::{
    DataService, Entity, IdGenerator, RecordId, RequestPayload, ServiceError, ValidationPipeline,
    fresh_id,
};
use serde_json::Value;
use std::sync::Arc;

pub const NAME_REQUIRED: &str = "Dish must include a name.";
pub const DESCRIPTION_REQUIRED: &str = "Dish must include a description.";
pub const IMAGE_REQUIRED: &str = "Dish must include an image_url.";
pub const PRICE_REQUIRED: &str = "Dish must include a price.";
pub const PRICE_INVALID: &str = "Dish must have a price that is an integer greater than 0";

/// Validation context for `PUT /dishes/{id}`
pub struct DishUpdate {
    pub route_id: RecordId,
    pub payload: Value,
}

impl RequestPayload for DishUpdate {
    fn payload(&self) -> &Value {
        &self.payload
    }
}

/// Field rules shared by create and update, in message order
fn dish_field_rules<C: RequestPayload>(pipeline: ValidationPipeline<C>) -> ValidationPipeline<C> {
    pipeline
        .field("has_name", required_text("name", NAME_REQUIRED))
        .field("has_description", required_text("description", DESCRIPTION_REQUIRED))
        .field("has_image", required_text("image_url", IMAGE_REQUIRED))
        .field("has_price", required("price", PRICE_REQUIRED))
        .field("price_is_integer", integer("price", PRICE_INVALID))
        .field("price_is_positive", positive("price", PRICE_INVALID))
}

/// Owns the dish collection and enforces its invariants
///
/// Dishes cannot be deleted.
#[derive(Clone)]
pub struct CatalogManager {
    store: Arc<dyn DataService<Dish>>,
    ids: Arc<dyn IdGenerator>,
    create_rules: Arc<ValidationPipeline<Value>>,
    update_rules: Arc<ValidationPipeline<DishUpdate>>,
}

impl CatalogManager {
    pub fn new(store: Arc<dyn DataService<Dish>>, ids: Arc<dyn IdGenerator>) -> Self {
        let create_rules = dish_field_rules(ValidationPipeline::new());
        let update_rules = dish_field_rules(ValidationPipeline::new().step(
            "id_matches_route",
            |ctx: &DishUpdate| id_matches_route(Dish::display_name(), &ctx.payload, &ctx.route_id),
        ));

        Self {
            store,
            ids,
            create_rules: Arc::new(create_rules),
            update_rules: Arc::new(update_rules),
        }
    }

    /// Catalog backed by an in-memory store and random identifiers
    #[cfg(feature = "in-memory")]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(crate::storage::InMemoryDataService::new()),
            Arc::new(crate::core::UuidIdGenerator),
        )
    }

    pub async fn list(&self) -> Result<Vec<Dish>, ServiceError> {
        Ok(self.store.list().await?)
    }

    pub async fn create(&self, payload: Value) -> Result<Dish, ServiceError> {
        self.create_rules.run(&payload)?;
        let draft: DishDraft = decode(payload)?;

        let id = fresh_id(self.ids.as_ref(), self.store.as_ref()).await?;
        let dish = self.store.create(draft.into_dish(id)).await?;

        tracing::debug!(id = %dish.id, name = %dish.name, "dish created");
        Ok(dish)
    }

    pub async fn read(&self, id: &RecordId) -> Result<Dish, ServiceError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(Dish::display_name(), id))
    }

    /// Overwrite a dish's fields once every rule has passed
    pub async fn update(&self, id: &RecordId, payload: Value) -> Result<Dish, ServiceError> {
        let current = self.read(id).await?;

        let ctx = DishUpdate {
            route_id: id.clone(),
            payload,
        };
        self.update_rules.run(&ctx)?;
        let draft: DishDraft = decode(ctx.payload)?;

        let dish = self.store.update(id, draft.into_dish(current.id)).await?;

        tracing::debug!(id = %dish.id, "dish updated");
        Ok(dish)
    }

    /// Load pre-existing dishes, keeping their identifiers.
    ///
    /// Each record must satisfy the same rules as a created dish.
    pub async fn seed(&self, dishes: Vec<Dish>) -> Result<usize, ServiceError> {
        let count = dishes.len();
        for dish in dishes {
            let payload = serde_json::to_value(&dish).map_err(anyhow::Error::from)?;
            self.create_rules.run(&payload)?;
            self.store.create(dish).await?;
        }
        tracing::info!(count, "seeded dishes");
        Ok(count)
    }
}
