//! API responses for the [`session`](crate::servers::apis::v1::context::session) API context.
use axum::http::StatusCode;
use axum::response::Response;

use super::resources::{Session, SessionCreated, SessionList};
use crate::core::sessions::{self, SessionRecord};
use crate::servers::apis::v1::responses::{bad_request_response, json_response, not_found_response, unhandled_rejection_response};

/// `200` response with the id of the new session.
#[must_use]
pub fn session_created_response(session: &SessionRecord) -> Response {
    json_response(StatusCode::OK, &SessionCreated::from(session))
}

/// `200` response that contains the [`Session`] resource as json.
#[must_use]
pub fn session_response(session: SessionRecord) -> Response {
    json_response(StatusCode::OK, &Session::from(session))
}

/// `200` response that contains the [`SessionList`] resource as json.
#[must_use]
pub fn session_list_response(sessions: Vec<SessionRecord>) -> Response {
    json_response(StatusCode::OK, &SessionList::from(sessions))
}

// Error responses

#[must_use]
pub fn missing_language_response() -> Response {
    bad_request_response("the language field is required")
}

/// `400` for invalid ids, `404` for unknown ones and a generic `500` when the
/// store can not be reached.
#[must_use]
pub fn failed_to_get_session_response(e: &sessions::Error) -> Response {
    match e {
        sessions::Error::InvalidIdentifier { .. } => bad_request_response(&e.to_string()),
        sessions::Error::NotFound { .. } => not_found_response(&e.to_string()),
        sessions::Error::StoreUnavailable { .. } => unhandled_rejection_response("failed to get session", e),
    }
}

#[must_use]
pub fn failed_to_create_session_response(e: &sessions::Error) -> Response {
    unhandled_rejection_response("failed to create session", e)
}

#[must_use]
pub fn failed_to_list_sessions_response(e: &sessions::Error) -> Response {
    unhandled_rejection_response("failed to list sessions", e)
}
