//! Service-wide routes and fallbacks

use crate::core::{RequestError, ServiceError};
use axum::http::{Method, Uri};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

/// Health check route
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "grubdash"
    }))
}

/// Fallback for paths no route matches
pub async fn not_found(uri: Uri) -> ServiceError {
    RequestError::RouteNotFound {
        path: uri.path().to_string(),
    }
    .into()
}

/// Fallback for known paths hit with an unsupported method
pub async fn method_not_allowed(method: Method, uri: Uri) -> ServiceError {
    RequestError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
    .into()
}
