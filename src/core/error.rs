//! Typed error handling for the ordering service
//!
//! Every failure a request can hit is a [`ServiceError`]. Handlers return it
//! directly; its [`IntoResponse`] implementation turns it into a status code
//! and a `{ "message": ... }` body.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: a request body broke a field rule (400)
//! - `NotFound`: the route identifier is unknown (404)
//! - `PolicyViolation`: the record exists but its state forbids the action (400)
//! - [`RequestError`]: the HTTP request itself is unusable (400/404/405/413)
//! - `Storage`: the backing store failed (500)
//!
//! # Example
//!
//! ```rust,ignore
//! match catalog.read(&id).await {
//!     Ok(dish) => println!("Found: {:?}", dish),
//!     Err(ServiceError::NotFound { id, .. }) => println!("Dish {} not found", id),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The main error type of the service
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A field rule rejected the request body
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record with the given identifier exists
    #[error("{entity_type} id does not exist: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// The record exists but its current state forbids the operation
    #[error("{0}")]
    PolicyViolation(String),

    /// The HTTP request could not be interpreted
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The storage backend failed
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,
}

impl ServiceError {
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        ServiceError::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Shorthand for a single-field validation failure
    pub fn field(field: &'static str, message: impl Into<String>) -> Self {
        ServiceError::Validation(ValidationError::Field {
            field,
            message: message.into(),
        })
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::PolicyViolation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Request(e) => e.status_code(),
            ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::Validation(e) => e.error_code(),
            ServiceError::NotFound { .. } => "NOT_FOUND",
            ServiceError::PolicyViolation(_) => "POLICY_VIOLATION",
            ServiceError::Request(e) => e.error_code(),
            ServiceError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            message: self.to_string(),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        } else {
            tracing::warn!(code = self.error_code(), status = status.as_u16(), error = %self, "request rejected");
        }
        (status, Json(self.to_response())).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors produced by request body validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A single field is missing, mistyped or out of range
    #[error("{message}")]
    Field { field: &'static str, message: String },

    /// The `id` in the body does not match the route identifier
    #[error("{entity_type} id does not match route id. {entity_type}: {body_id}, Route: {route_id}.")]
    IdMismatch {
        entity_type: &'static str,
        body_id: String,
        route_id: String,
    },
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::Field { .. } => "VALIDATION_ERROR",
            ValidationError::IdMismatch { .. } => "ID_MISMATCH",
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Field { field, .. } => field,
            ValidationError::IdMismatch { .. } => "id",
        }
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to the HTTP request rather than its content
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The body is not valid JSON
    #[error("Request body is not valid JSON: {0}")]
    MalformedBody(String),

    /// The body could not be read (too large, aborted, ...)
    #[error("{message}")]
    UnreadableBody { status: StatusCode, message: String },

    /// No route matches the path
    #[error("Path not found: {path}")]
    RouteNotFound { path: String },

    /// The path exists but not for this method
    #[error("{method} not allowed for {path}")]
    MethodNotAllowed { method: String, path: String },
}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            RequestError::UnreadableBody { status, .. } => *status,
            RequestError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            RequestError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::MalformedBody(_) => "MALFORMED_BODY",
            RequestError::UnreadableBody { .. } => "UNREADABLE_BODY",
            RequestError::RouteNotFound { .. } => "ROUTE_NOT_FOUND",
            RequestError::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ServiceError::not_found("Dish", "abc");
        assert_eq!(err.to_string(), "Dish id does not exist: abc");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_error_is_bad_request() {
        let err = ServiceError::field("price", "Dish must include a price.");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(err.to_string(), "Dish must include a price.");
    }

    #[test]
    fn test_id_mismatch_display() {
        let err = ValidationError::IdMismatch {
            entity_type: "Order",
            body_id: "2".to_string(),
            route_id: "1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Order id does not match route id. Order: 2, Route: 1."
        );
        assert_eq!(err.field(), "id");
    }

    #[test]
    fn test_policy_violation_is_bad_request() {
        let err = ServiceError::PolicyViolation("nope".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "POLICY_VIOLATION");
    }

    #[test]
    fn test_request_error_status_codes() {
        let cases = [
            (RequestError::MalformedBody("eof".into()), StatusCode::BAD_REQUEST),
            (
                RequestError::UnreadableBody {
                    status: StatusCode::PAYLOAD_TOO_LARGE,
                    message: "length limit exceeded".into(),
                },
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
            (
                RequestError::RouteNotFound { path: "/x".into() },
                StatusCode::NOT_FOUND,
            ),
            (
                RequestError::MethodNotAllowed {
                    method: "DELETE".into(),
                    path: "/dishes/1".into(),
                },
                StatusCode::METHOD_NOT_ALLOWED,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ServiceError::from(err).status_code(), status);
        }
    }

    #[test]
    fn test_storage_error_is_internal() {
        let err = ServiceError::from(anyhow::anyhow!("lock poisoned"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "lock poisoned");
    }

    #[test]
    fn test_error_response_serialization() {
        let err = ServiceError::PolicyViolation("An order cannot be deleted unless it is pending.".into());
        let json = serde_json::to_value(err.to_response()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "message": "An order cannot be deleted unless it is pending." })
        );
    }
}
