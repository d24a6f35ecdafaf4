//! Tests for request-level errors and service-wide routes
//!
//! These tests verify that:
//! - Malformed bodies, unknown paths and unsupported methods get JSON errors
//! - Error bodies always have the `{ "message": ... }` shape
//! - The health route answers

mod common;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::{server, taco};
use grubdash::prelude::*;
use serde_json::Value;

// =============================================================================
// HTTP Status Code Tests
// =============================================================================

mod status_code_tests {
    use super::*;

    #[test]
    fn test_validation_error_returns_400() {
        let err = ServiceError::field("name", "Dish must include a name.");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_returns_404() {
        let err = ServiceError::not_found("Order", "abc");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_policy_violation_returns_400() {
        let err = ServiceError::PolicyViolation("not pending".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_into_response_uses_status_code() {
        let response = ServiceError::not_found("Dish", "x").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

// =============================================================================
// HTTP Error Response Tests
// =============================================================================

mod response_tests {
    use super::*;

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let server = server();

        let response = server.post("/dishes").text("{ not json").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .starts_with("Request body is not valid JSON")
        );
    }

    #[tokio::test]
    async fn test_oversized_body_is_413() {
        let server = server();
        let body = vec![b' '; 3 * 1024 * 1024];

        let response = server.post("/dishes").bytes(body.into()).await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
        let message: Value = response.json();
        assert!(message["message"].is_string());
    }

    #[tokio::test]
    async fn test_empty_body_fails_first_presence_check() {
        let server = server();

        let response = server.post("/orders").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>(),
            json!({ "message": "Order must include a deliverTo" })
        );
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let server = server();

        let response = server.get("/menus").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(
            response.json::<Value>(),
            json!({ "message": "Path not found: /menus" })
        );
    }

    #[tokio::test]
    async fn test_unsupported_method_is_405() {
        let server = server();

        let response = server.delete("/dishes").await;

        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            response.json::<Value>(),
            json!({ "message": "DELETE not allowed for /dishes" })
        );
    }

    #[tokio::test]
    async fn test_validation_error_body_has_only_message() {
        let server = server();

        let response = server
            .post("/dishes")
            .json(&json!({ "data": { "name": "Taco" } }))
            .await;

        let body: Value = response.json();
        let keys: Vec<&String> = body.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["message"]);
    }

    #[tokio::test]
    async fn test_health() {
        let server = server();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.json::<Value>()["status"], "ok");
    }

    #[tokio::test]
    async fn test_resources_share_no_state() {
        let server = server();
        server
            .post("/dishes")
            .json(&json!({ "data": taco() }))
            .await
            .assert_status(StatusCode::CREATED);

        // Dish "1" exists, order "1" does not
        server.get("/dishes/1").await.assert_status(StatusCode::OK);
        server
            .get("/orders/1")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
