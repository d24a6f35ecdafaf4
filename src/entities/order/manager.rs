//! Order manager: validation, status policy and lifecycle of orders

use super::model::{Order, OrderDraft, OrderStatus};
use crate::core::validation::validators::{
    decode, field, id_matches_route, in_list, is_positive_integer, non_empty_array,
    optional_in_list, required, required_text,
};
use crate::core::{
    DataService, Entity, IdGenerator, RecordId, RequestPayload, ServiceError, ValidationPipeline,
    fresh_id,
};
use serde_json::Value;
use std::sync::Arc;

pub const DELIVER_TO_REQUIRED: &str = "Order must include a deliverTo";
pub const MOBILE_NUMBER_REQUIRED: &str = "Order must include a mobileNumber";
pub const DISHES_REQUIRED: &str = "Order must include a dish";
pub const DISHES_EMPTY: &str = "Order must include at least one dish";
pub const STATUS_INVALID: &str =
    "Order must have a status of pending, preparing, out-for-delivery, delivered";
pub const DELIVERED_IMMUTABLE: &str = "A delivered order cannot be changed";
pub const DELETE_NOT_PENDING: &str = "An order cannot be deleted unless it is pending.";

/// Validation context for `PUT /orders/{id}`
pub struct OrderUpdate {
    pub route_id: RecordId,
    pub payload: Value,
    /// Status of the stored order before this update
    pub current_status: OrderStatus,
}

impl RequestPayload for OrderUpdate {
    fn payload(&self) -> &Value {
        &self.payload
    }
}

/// Every line item must carry a positive integer quantity.
///
/// Reports the first offending index. Non-array `dishes` are left to the
/// array check.
pub fn line_item_quantities(payload: &Value) -> Result<(), ServiceError> {
    let Some(items) = field(payload, "dishes").as_array() else {
        return Ok(());
    };

    match items
        .iter()
        .position(|item| !is_positive_integer(field(item, "quantity")))
    {
        Some(index) => Err(ServiceError::field(
            "dishes",
            format!(
                "Dish at {} must have a quantity that is an integer greater than 0",
                index
            ),
        )),
        None => Ok(()),
    }
}

fn not_delivered(ctx: &OrderUpdate) -> Result<(), ServiceError> {
    if ctx.current_status.is_terminal() {
        return Err(ServiceError::field("status", DELIVERED_IMMUTABLE));
    }
    Ok(())
}

fn contact_and_dish_rules<C: RequestPayload>(
    pipeline: ValidationPipeline<C>,
) -> ValidationPipeline<C> {
    pipeline
        .field("has_deliver_to", required_text("deliverTo", DELIVER_TO_REQUIRED))
        .field(
            "has_mobile_number",
            required_text("mobileNumber", MOBILE_NUMBER_REQUIRED),
        )
        .field("has_dishes", required("dishes", DISHES_REQUIRED))
        .field("dishes_is_array", non_empty_array("dishes", DISHES_EMPTY))
}

fn create_rules() -> ValidationPipeline<Value> {
    contact_and_dish_rules(ValidationPipeline::new())
        .field("dish_quantities", line_item_quantities)
        .field(
            "known_status",
            optional_in_list("status", OrderStatus::NAMES, STATUS_INVALID),
        )
}

fn update_rules() -> ValidationPipeline<OrderUpdate> {
    contact_and_dish_rules(ValidationPipeline::new())
        .field("has_status", in_list("status", OrderStatus::NAMES, STATUS_INVALID))
        .step("not_delivered", not_delivered)
        .field("dish_quantities", line_item_quantities)
        .step("id_matches_route", |ctx: &OrderUpdate| {
            id_matches_route(Order::display_name(), &ctx.payload, &ctx.route_id)
        })
}

/// Owns the order collection and enforces the order lifecycle
#[derive(Clone)]
pub struct OrderManager {
    store: Arc<dyn DataService<Order>>,
    ids: Arc<dyn IdGenerator>,
    create_rules: Arc<ValidationPipeline<Value>>,
    update_rules: Arc<ValidationPipeline<OrderUpdate>>,
}

impl OrderManager {
    pub fn new(store: Arc<dyn DataService<Order>>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store,
            ids,
            create_rules: Arc::new(create_rules()),
            update_rules: Arc::new(update_rules()),
        }
    }

    /// Orders backed by an in-memory store and random identifiers
    #[cfg(feature = "in-memory")]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(crate::storage::InMemoryDataService::new()),
            Arc::new(crate::core::UuidIdGenerator),
        )
    }

    pub async fn list(&self) -> Result<Vec<Order>, ServiceError> {
        Ok(self.store.list().await?)
    }

    /// Create an order; a missing status starts it as pending
    pub async fn create(&self, payload: Value) -> Result<Order, ServiceError> {
        self.create_rules.run(&payload)?;
        let draft: OrderDraft = decode(payload)?;

        let id = fresh_id(self.ids.as_ref(), self.store.as_ref()).await?;
        let order = self
            .store
            .create(draft.into_order(id, OrderStatus::Pending))
            .await?;

        tracing::debug!(id = %order.id, status = %order.status, items = order.dishes.len(), "order created");
        Ok(order)
    }

    pub async fn read(&self, id: &RecordId) -> Result<Order, ServiceError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(Order::display_name(), id))
    }

    /// Replace an order's fields unless it has already been delivered
    pub async fn update(&self, id: &RecordId, payload: Value) -> Result<Order, ServiceError> {
        let current = self.read(id).await?;

        let ctx = OrderUpdate {
            route_id: id.clone(),
            payload,
            current_status: current.status,
        };
        self.update_rules.run(&ctx)?;
        let draft: OrderDraft = decode(ctx.payload)?;

        let order = self
            .store
            .update(id, draft.into_order(current.id, current.status))
            .await?;

        tracing::debug!(
            id = %order.id,
            from = %current.status,
            to = %order.status,
            "order updated"
        );
        Ok(order)
    }

    /// Remove a pending order
    pub async fn delete(&self, id: &RecordId) -> Result<(), ServiceError> {
        let current = self.read(id).await?;
        if !current.status.is_deletable() {
            return Err(ServiceError::PolicyViolation(DELETE_NOT_PENDING.to_string()));
        }

        self.store.delete(id).await?;

        tracing::debug!(%id, "order deleted");
        Ok(())
    }

    /// Load pre-existing orders, keeping their identifiers and statuses.
    ///
    /// Each record must satisfy the same rules as a created order.
    pub async fn seed(&self, orders: Vec<Order>) -> Result<usize, ServiceError> {
        let count = orders.len();
        for order in orders {
            let payload = serde_json::to_value(&order).map_err(anyhow::Error::from)?;
            self.create_rules.run(&payload)?;
            self.store.create(order).await?;
        }
        tracing::info!(count, "seeded orders");
        Ok(count)
    }
}
