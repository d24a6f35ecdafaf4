//! Order HTTP handlers

use super::manager::OrderManager;
use super::model::Order;
use crate::core::{DataPayload, DataResponse, RecordId, ServiceError};
use axum::extract::{Path, State};
use axum::http::StatusCode;

pub async fn list_orders(
    State(orders): State<OrderManager>,
) -> Result<DataResponse<Vec<Order>>, ServiceError> {
    orders.list().await.map(DataResponse::ok)
}

pub async fn create_order(
    State(orders): State<OrderManager>,
    DataPayload(payload): DataPayload,
) -> Result<DataResponse<Order>, ServiceError> {
    orders.create(payload).await.map(DataResponse::created)
}

pub async fn get_order(
    State(orders): State<OrderManager>,
    Path(id): Path<String>,
) -> Result<DataResponse<Order>, ServiceError> {
    orders.read(&RecordId::new(id)).await.map(DataResponse::ok)
}

pub async fn update_order(
    State(orders): State<OrderManager>,
    Path(id): Path<String>,
    DataPayload(payload): DataPayload,
) -> Result<DataResponse<Order>, ServiceError> {
    orders
        .update(&RecordId::new(id), payload)
        .await
        .map(DataResponse::ok)
}

pub async fn delete_order(
    State(orders): State<OrderManager>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServiceError> {
    orders
        .delete(&RecordId::new(id))
        .await
        .map(|_| StatusCode::NO_CONTENT)
}
