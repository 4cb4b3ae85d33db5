//! API handlers for the [`session`](crate::servers::apis::v1::context::session)
//! API context.
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;

use super::forms::CreateSessionForm;
use super::responses::{
    failed_to_create_session_response, failed_to_get_session_response, failed_to_list_sessions_response,
    missing_language_response, session_created_response, session_list_response, session_response,
};
use crate::core::DocsService;
use crate::servers::apis::blocking;
use crate::servers::apis::v1::responses::{bad_request_response, unhandled_rejection_response};

const SESSION_TASK_FAILED: &str = "the session store task failed";

/// It handles the request to create a new learning session.
///
/// It returns:
///
/// - `200` response with a [`SessionCreated`](crate::servers::apis::v1::context::session::resources::SessionCreated) in json.
/// - `400` if the body is not valid or the language is empty.
/// - `500` if the session could not be saved.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::session#create-a-session)
/// for more information about this endpoint.
pub async fn create_session_handler(
    State(docs): State<Arc<DocsService>>,
    form: Result<Json<CreateSessionForm>, JsonRejection>,
) -> Response {
    let form = match form {
        Ok(Json(form)) => form,
        Err(rejection) => return bad_request_response(&rejection.body_text()),
    };

    if form.language.trim().is_empty() {
        return missing_language_response();
    }

    let result = blocking::run(docs, move |docs| {
        docs.create_session(&form.language, form.topic.as_deref(), form.user_id.as_deref())
    })
    .await;

    match result {
        Ok(Ok(session)) => session_created_response(&session),
        Ok(Err(e)) => failed_to_create_session_response(&e),
        Err(e) => unhandled_rejection_response(SESSION_TASK_FAILED, &e),
    }
}

/// It handles the request to get a learning session by its id.
///
/// It returns:
///
/// - `200` response with a [`Session`](crate::servers::apis::v1::context::session::resources::Session) in json.
/// - `400` if the id is not a valid session id.
/// - `404` if there is no session with that id.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::session#get-a-session)
/// for more information about this endpoint.
pub async fn get_session_handler(State(docs): State<Arc<DocsService>>, Path(id): Path<String>) -> Response {
    match blocking::run(docs, move |docs| docs.get_session(&id)).await {
        Ok(Ok(session)) => session_response(session),
        Ok(Err(e)) => failed_to_get_session_response(&e),
        Err(e) => unhandled_rejection_response(SESSION_TASK_FAILED, &e),
    }
}

/// It handles the request to list the learning sessions of a user.
///
/// It returns a `200` response with a [`SessionList`](crate::servers::apis::v1::context::session::resources::SessionList)
/// in json, empty when the user has no sessions.
pub async fn get_user_sessions_handler(State(docs): State<Arc<DocsService>>, Path(user_id): Path<String>) -> Response {
    match blocking::run(docs, move |docs| docs.list_sessions(&user_id)).await {
        Ok(Ok(sessions)) => session_list_response(sessions),
        Ok(Err(e)) => failed_to_list_sessions_response(&e),
        Err(e) => unhandled_rejection_response(SESSION_TASK_FAILED, &e),
    }
}
