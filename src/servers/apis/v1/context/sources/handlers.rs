//! API handlers for the [`sources`](crate::servers::apis::v1::context::sources)
//! API context.
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use tracing::info;

use crate::core::DocsService;
use crate::servers::apis::API_LOG_TARGET;
use crate::servers::apis::v1::responses::{error_response, ok_response};

pub const FAILED_TO_RELOAD: &str = "failed to reload the language sources";

/// It handles the request to load the sources file again.
///
/// It returns:
///
/// - `200` response with a [`ActionStatus::Ok`](crate::servers::apis::v1::responses::ActionStatus::Ok) in json.
/// - `500` with a generic error response otherwise.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::sources#reload-the-sources)
/// for more information about this endpoint.
pub async fn reload_sources_handler(State(docs): State<Arc<DocsService>>) -> Response {
    match docs.reload_sources() {
        Ok(table) => {
            info!(target: API_LOG_TARGET, "language sources reloaded with {} languages", table.len());

            ok_response()
        }
        Err(e) => {
            tracing::error!(target: API_LOG_TARGET, "{FAILED_TO_RELOAD}: {e}");

            error_response(StatusCode::INTERNAL_SERVER_ERROR, FAILED_TO_RELOAD)
        }
    }
}
