//! API handlers for the [`docs_source`](crate::servers::apis::v1::context::docs_source)
//! API context.
use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::Response;
use axum::Json;

use super::forms::DocsSourceForm;
use super::responses::{docs_source_response, failed_to_resolve_response, missing_language_response};
use crate::core::DocsService;
use crate::servers::apis::v1::responses::bad_request_response;

/// It handles the `GET` request to resolve a documentation source from the
/// query parameters.
///
/// It returns:
///
/// - `200` response with a [`DocsSource`](crate::servers::apis::v1::context::docs_source::resources::DocsSource) in json.
/// - `400` if the `language` parameter is missing.
/// - `404` if the language or topic can not be resolved.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::docs_source#resolve-a-documentation-source)
/// for more information about this endpoint.
pub async fn get_docs_source_handler(
    State(docs): State<Arc<DocsService>>,
    params: Result<Query<DocsSourceForm>, QueryRejection>,
) -> Response {
    match params {
        Ok(Query(form)) => resolve(&docs, &form),
        Err(rejection) => bad_request_response(&rejection.body_text()),
    }
}

/// It handles the `POST` request to resolve a documentation source from a
/// json body. It answers like [`get_docs_source_handler`].
pub async fn post_docs_source_handler(
    State(docs): State<Arc<DocsService>>,
    form: Result<Json<DocsSourceForm>, JsonRejection>,
) -> Response {
    match form {
        Ok(Json(form)) => resolve(&docs, &form),
        Err(rejection) => bad_request_response(&rejection.body_text()),
    }
}

fn resolve(docs: &DocsService, form: &DocsSourceForm) -> Response {
    let Some(language) = form.language.as_deref().filter(|language| !language.trim().is_empty()) else {
        return missing_language_response();
    };

    match docs.resolve(language, form.topic.as_deref()) {
        Ok(url) => docs_source_response(url),
        Err(e) => failed_to_resolve_response(&e),
    }
}
