//! API responses for the [`docs_source`](crate::servers::apis::v1::context::docs_source) API context.
use axum::http::StatusCode;
use axum::response::Response;

use super::resources::DocsSource;
use crate::core::resolver;
use crate::servers::apis::v1::responses::{bad_request_response, json_response, not_found_response, unhandled_rejection_response};

/// `200` response that contains the [`DocsSource`] resource as json.
#[must_use]
pub fn docs_source_response(url: String) -> Response {
    json_response(StatusCode::OK, &DocsSource { url })
}

// Error responses

#[must_use]
pub fn missing_language_response() -> Response {
    bad_request_response("the language parameter is required")
}

/// `404` when the language or the topic can not be resolved. `500` when the
/// sources table can not be loaded.
#[must_use]
pub fn failed_to_resolve_response(e: &resolver::Error) -> Response {
    match e {
        resolver::Error::LanguageNotFound { .. } | resolver::Error::TopicNotFound { .. } => not_found_response(&e.to_string()),
        resolver::Error::SourcesUnavailable { .. } => unhandled_rejection_response("failed to load the language sources", e),
    }
}
