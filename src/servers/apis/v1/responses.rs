//! Common responses for the API v1 shared by all the contexts.
//!
//! Every error answers with a JSON body with a single `detail` attribute:
//!
//! ```json
//! { "detail": "Language not found: ruby" }
//! ```
//!
//! Unexpected failures are logged with all their detail but the client only
//! gets a generic message.
use std::error::Error;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::servers::apis::API_LOG_TARGET;

/// Generic message for `500` responses.
pub const INTERNAL_SERVER_ERROR: &str = "internal server error";

/// Response status used when a request succeeds and no data is returned.
#[derive(Serialize, Debug)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ActionStatus {
    Ok,
}

/// Body of all the error responses.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ErrorDetail {
    pub detail: String,
}

/// A response with a resource serialized as json.
///
/// # Panics
///
/// Will panic if it can't convert the resource to json
#[must_use]
pub fn json_response<T: Serialize>(status: StatusCode, resource: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        serde_json::to_string(resource).unwrap(),
    )
        .into_response()
}

// OK response

#[must_use]
pub fn ok_response() -> Response {
    json_response(StatusCode::OK, &ActionStatus::Ok)
}

// Error responses

#[must_use]
pub fn error_response(status: StatusCode, detail: &str) -> Response {
    json_response(
        status,
        &ErrorDetail {
            detail: detail.to_owned(),
        },
    )
}

#[must_use]
pub fn bad_request_response(detail: &str) -> Response {
    error_response(StatusCode::BAD_REQUEST, detail)
}

#[must_use]
pub fn not_found_response(detail: &str) -> Response {
    error_response(StatusCode::NOT_FOUND, detail)
}

#[must_use]
pub fn unauthorized_response(detail: &str) -> Response {
    error_response(StatusCode::UNAUTHORIZED, detail)
}

/// `500` error response. The error is logged but not returned to the client.
#[must_use]
pub fn unhandled_rejection_response<E: Error>(context: &str, e: &E) -> Response {
    tracing::error!(target: API_LOG_TARGET, "{context}: {e}");

    error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
}
