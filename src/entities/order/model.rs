//! Order record, line items and status

use crate::core::validation::validators::deserialize_integer;
use crate::core::{Entity, RecordId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Delivery progress of an order.
///
/// The statuses form a linear progression, but only two rules are enforced:
/// `Delivered` is terminal and only `Pending` orders may be deleted. Moving
/// backwards between the other statuses is allowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    /// Wire names of every status, in progression order
    pub const NAMES: &'static [&'static str] =
        &["pending", "preparing", "out-for-delivery", "delivered"];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// No further changes are accepted once an order reaches this status
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }

    pub fn is_deletable(&self) -> bool {
        matches!(self, OrderStatus::Pending)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown order status: {}", s))
    }
}

/// One `{dishId, quantity}` entry of an order.
///
/// Only `quantity` is interpreted. Every other key, `dishId` included, is kept
/// exactly as the client sent it; clients often attach a snapshot of the dish
/// (name, price, ...) as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(deserialize_with = "deserialize_integer")]
    pub quantity: i64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl LineItem {
    pub fn new(dish_id: impl Into<Value>, quantity: i64) -> Self {
        let mut details = Map::new();
        details.insert("dishId".to_string(), dish_id.into());
        Self { quantity, details }
    }
}

/// A delivery order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: RecordId,
    pub deliver_to: String,
    pub mobile_number: String,
    #[serde(default)]
    pub status: OrderStatus,
    pub dishes: Vec<LineItem>,
}

impl Entity for Order {
    fn resource_name() -> &'static str {
        "orders"
    }

    fn resource_name_singular() -> &'static str {
        "order"
    }

    fn display_name() -> &'static str {
        "Order"
    }

    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Order fields decoded from an already validated payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub deliver_to: String,
    pub mobile_number: String,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    pub dishes: Vec<LineItem>,
}

impl OrderDraft {
    /// Build the stored record, using `fallback` when no status was sent
    pub fn into_order(self, id: RecordId, fallback: OrderStatus) -> Order {
        Order {
            id,
            deliver_to: self.deliver_to,
            mobile_number: self.mobile_number,
            status: self.status.unwrap_or(fallback),
            dishes: self.dishes,
        }
    }
}
