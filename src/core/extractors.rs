//! Axum extractors and response wrappers for the `{ "data": ... }` envelope
//!
//! Request and response bodies both wrap the record in a `data` key.

use crate::core::error::{RequestError, ServiceError};
use axum::Json;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Map, Value};

/// The `data` object of a request body.
///
/// An empty body, a body that is not an object, a missing `data` key or a
/// `data` value that is not an object all become an empty object, so the
/// first presence check of the validation pipeline reports what is missing.
/// Only unparseable JSON is rejected here.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPayload(pub Value);

impl DataPayload {
    /// Extract the `data` object from a decoded body
    pub fn from_body(body: Value) -> Self {
        match body {
            Value::Object(mut map) => match map.remove("data") {
                Some(data @ Value::Object(_)) => Self(data),
                _ => Self::empty(),
            },
            _ => Self::empty(),
        }
    }

    pub fn empty() -> Self {
        Self(Value::Object(Map::new()))
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl<S> FromRequest<S> for DataPayload
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| RequestError::UnreadableBody {
                status: e.status(),
                message: e.body_text(),
            })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::empty());
        }

        let body: Value = serde_json::from_slice(&bytes)
            .map_err(|e| RequestError::MalformedBody(e.to_string()))?;

        Ok(Self::from_body(body))
    }
}

/// Successful response body: `{ "data": ... }` with a status code
#[derive(Debug)]
pub struct DataResponse<T> {
    status: StatusCode,
    data: T,
}

#[derive(Serialize)]
struct Envelope<'a, T> {
    data: &'a T,
}

impl<T: Serialize> DataResponse<T> {
    /// 200 OK
    pub fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            data,
        }
    }

    /// 201 Created
    pub fn created(data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            data,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn data(&self) -> &T {
        &self.data
    }
}

impl<T: Serialize> IntoResponse for DataResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(Envelope { data: &self.data })).into_response()
    }
}
