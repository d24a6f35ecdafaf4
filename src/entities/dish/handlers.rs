//! Dish HTTP handlers

use super::manager::CatalogManager;
use super::model::Dish;
use crate::core::{DataPayload, DataResponse, RecordId, ServiceError};
use axum::extract::{Path, State};

pub async fn list_dishes(
    State(catalog): State<CatalogManager>,
) -> Result<DataResponse<Vec<Dish>>, ServiceError> {
    catalog.list().await.map(DataResponse::ok)
}

pub async fn create_dish(
    State(catalog): State<CatalogManager>,
    DataPayload(payload): DataPayload,
) -> Result<DataResponse<Dish>, ServiceError> {
    catalog.create(payload).await.map(DataResponse::created)
}

pub async fn get_dish(
    State(catalog): State<CatalogManager>,
    Path(id): Path<String>,
) -> Result<DataResponse<Dish>, ServiceError> {
    catalog.read(&RecordId::new(id)).await.map(DataResponse::ok)
}

pub async fn update_dish(
    State(catalog): State<CatalogManager>,
    Path(id): Path<String>,
    DataPayload(payload): DataPayload,
) -> Result<DataResponse<Dish>, ServiceError> {
    catalog
        .update(&RecordId::new(id), payload)
        .await
        .map(DataResponse::ok)
}
